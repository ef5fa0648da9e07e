//! Listing handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{CreateListingRequest, ListingResponse},
    middleware::JsonBody,
    services::listing::parse_listing_id,
    startup::AppState,
};

/// Create a listing from host facts and a generated description.
pub async fn create_listing(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), AppError> {
    let listing = state.listings.create(payload.host_input_facts).await?;

    Ok((StatusCode::CREATED, Json(ListingResponse::from(listing))))
}

/// Get a listing by ID.
pub async fn get_listing(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ListingResponse>, AppError> {
    let id = parse_listing_id(&raw_id)?;
    tracing::info!(listing_id = id, "Fetching listing");

    let listing = state.listings.get(id).await?;

    Ok(Json(ListingResponse::from(listing)))
}
