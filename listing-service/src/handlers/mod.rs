//! HTTP handlers for listing-service.

pub mod health;
pub mod listings;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use listings::{create_listing, get_listing};
