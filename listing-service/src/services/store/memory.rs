//! In-process listing store.
//!
//! Keeps rows in their storage encoding (serialized facts text) so reads go
//! through the same decoding path as the PostgreSQL store.

use super::ListingStore;
use crate::models::{Listing, ListingRow, NewListing};
use async_trait::async_trait;
use chrono::Utc;
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, ListingRow>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryListingStore {
    inner: Arc<RwLock<Inner>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Make every subsequent operation fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "listing store is unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn insert(&self, listing: NewListing) -> Result<Listing, AppError> {
        self.ensure_available()?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let row = ListingRow {
            id: inner.last_id,
            host_input_facts: listing.facts,
            ai_description: listing.description,
            created_at: Utc::now(),
        };
        inner.rows.insert(row.id, row.clone());

        Listing::try_from(row)
    }

    async fn get(&self, id: i64) -> Result<Option<Listing>, AppError> {
        self.ensure_available()?;

        let row = self.inner.read().await.rows.get(&id).cloned();
        row.map(Listing::try_from).transpose()
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ensure_available()
    }
}
