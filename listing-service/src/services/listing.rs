//! Listing orchestration.
//!
//! `create` is a two-step pipeline: generate a description, then persist the
//! row. The steps are not atomic. If the store write fails after the
//! generator succeeded, the description is discarded and the caller gets a
//! server error; nothing is retried or cached.

use crate::models::{Facts, Listing, NewListing};
use crate::services::generator::DescriptionGenerator;
use crate::services::metrics::{
    DESCRIPTION_DURATION_SECONDS, DESCRIPTION_FAILURES_TOTAL, LISTINGS_CREATED_TOTAL,
};
use crate::services::store::ListingStore;
use metrics::{counter, histogram};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn ListingStore>,
    generator: Arc<dyn DescriptionGenerator>,
}

impl ListingService {
    pub fn new(store: Arc<dyn ListingStore>, generator: Arc<dyn DescriptionGenerator>) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &Arc<dyn ListingStore> {
        &self.store
    }

    /// Generate a description for `facts` and persist both as a new listing.
    #[instrument(skip(self, facts), fields(fact_count = facts.len()))]
    pub async fn create(&self, facts: Facts) -> Result<Listing, AppError> {
        let serialized = serde_json::to_string(&facts).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Error marshaling facts: {}", e))
        })?;
        tracing::debug!(host_input_facts = %serialized, "Received listing facts");

        let description = self.generate(&facts).await?;

        self.persist(NewListing {
            facts: serialized,
            description,
        })
        .await
    }

    /// Fetch a listing by identifier. Identifiers start at 1.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Listing, AppError> {
        if id <= 0 {
            return Err(AppError::BadRequest(anyhow::anyhow!("Invalid listing ID")));
        }

        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Listing not found")))
    }

    async fn generate(&self, facts: &Facts) -> Result<String, AppError> {
        let start = Instant::now();
        let result = self.generator.generate(facts).await;
        histogram!(DESCRIPTION_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

        result.map_err(|e| {
            counter!(DESCRIPTION_FAILURES_TOTAL, "reason" => e.kind()).increment(1);
            AppError::from(e)
        })
    }

    async fn persist(&self, listing: NewListing) -> Result<Listing, AppError> {
        let listing = self.store.insert(listing).await.map_err(|e| {
            tracing::warn!(error = %e, "Store write failed; generated description discarded");
            e
        })?;

        counter!(LISTINGS_CREATED_TOTAL).increment(1);
        info!(listing_id = listing.id, "Listing created");

        Ok(listing)
    }
}

/// Parse a path segment into a listing identifier.
pub fn parse_listing_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(anyhow::anyhow!("Invalid listing ID"))),
    }
}
