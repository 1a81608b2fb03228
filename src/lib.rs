//! PRISM Profiler - professional role profiling and learning-environment design.
//!
//! A two-stage wizard: rate a role against the SKIVE competency taxonomy,
//! then map the prioritised competencies onto learning objectives and
//! authentic-learning checklists. Profiles persist through a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
