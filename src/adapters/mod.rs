//! Adapters - implementations of ports.
//!
//! - `api` - reqwest client and in-memory store for the profile API
//! - `objective` - objective suggesters (offline template, test mock)
//! - `http` - axum reference server exposing the profile API

pub mod api;
pub mod http;
pub mod objective;
