//! Listing persistence.
//!
//! The service talks to storage only through [`ListingStore`], so the
//! PostgreSQL backend can be swapped for the in-memory one in tests.

pub mod memory;
pub mod postgres;

use crate::models::{Listing, NewListing};
use async_trait::async_trait;
use service_core::error::AppError;

pub use memory::InMemoryListingStore;
pub use postgres::PostgresListingStore;

#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Insert one row and return it with the store-assigned `id` and `created_at`.
    async fn insert(&self, listing: NewListing) -> Result<Listing, AppError>;

    /// Fetch one row by identifier.
    async fn get(&self, id: i64) -> Result<Option<Listing>, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn health_check(&self) -> Result<(), AppError>;
}
