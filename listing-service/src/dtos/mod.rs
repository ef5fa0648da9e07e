use serde::{Deserialize, Serialize};

use crate::models::{Facts, Listing};

/// Body of `POST /listings/create`.
#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub host_input_facts: Facts,
}

/// Normalized representation returned for a listing.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListingResponse {
    pub id: i64,
    pub host_input_facts: Facts,
    pub ai_description: String,
    pub created_at: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let created_at = listing.created_at_rfc3339();
        Self {
            id: listing.id,
            host_input_facts: listing.facts,
            ai_description: listing.description,
            created_at,
        }
    }
}
