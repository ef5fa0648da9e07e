//! PostgreSQL-backed listing store.

use super::ListingStore;
use crate::models::{Listing, ListingRow, NewListing};
use async_trait::async_trait;
use service_core::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct PostgresListingStore {
    pool: PgPool,
}

impl PostgresListingStore {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "listing-service"))]
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Apply the embedded migrations in `./migrations`.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

#[async_trait]
impl ListingStore for PostgresListingStore {
    #[instrument(skip(self, listing), fields(description_len = listing.description.len()))]
    async fn insert(&self, listing: NewListing) -> Result<Listing, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            INSERT INTO listings (host_input_facts, ai_description)
            VALUES ($1::jsonb, $2)
            RETURNING id, host_input_facts::text AS host_input_facts, ai_description, created_at
            "#,
        )
        .bind(&listing.facts)
        .bind(&listing.description)
        .fetch_one(&self.pool)
        .await?;

        info!(listing_id = row.id, "Listing saved");

        Listing::try_from(row)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> Result<Option<Listing>, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT id, host_input_facts::text AS host_input_facts, ai_description, created_at
            FROM listings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Listing::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
