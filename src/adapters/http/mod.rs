//! HTTP adapter - axum reference server for the profile API.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PrismHandlers;
pub use routes::prism_router;
