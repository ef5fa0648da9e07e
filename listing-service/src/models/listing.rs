//! Listing model.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use sqlx::FromRow;

/// Host-supplied facts about a property. Opaque to this service.
pub type Facts = serde_json::Map<String, serde_json::Value>;

/// A persisted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub facts: Facts,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// `created_at` as RFC 3339 in UTC with second precision.
    pub fn created_at_rfc3339(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Row to insert. `facts` is already serialized JSON text.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub facts: String,
    pub description: String,
}

/// Storage encoding of a listing.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRow {
    pub id: i64,
    pub host_input_facts: String,
    pub ai_description: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = AppError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let facts: Facts = serde_json::from_str(&row.host_input_facts).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Stored facts for listing {} are not a JSON object: {}",
                row.id,
                e
            ))
        })?;

        Ok(Listing {
            id: row.id,
            facts,
            description: row.ai_description,
            created_at: row.created_at,
        })
    }
}
