//! Adapters between the outside world and the domain model.

pub mod config;
pub mod csv;
pub mod report;
