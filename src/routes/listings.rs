use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::listing_dto::{Credentials, ListingDetailsPayload, ListingsResponse, LoadListingsPayload},
    error::Result,
    services::listing_filter::facets,
    AppState,
};

#[axum::debug_handler]
pub async fn load_listings(
    State(state): State<AppState>,
    Json(payload): Json<LoadListingsPayload>,
) -> Result<impl IntoResponse> {
    let listings = state
        .listing_service
        .load_all_listings(&payload.credentials)
        .await?;

    let facets = facets(&listings);
    let items = payload.filter.apply(listings);
    Ok(Json(ListingsResponse {
        total: items.len(),
        items,
        facets,
    }))
}

#[axum::debug_handler]
pub async fn load_listing_details(
    State(state): State<AppState>,
    Json(payload): Json<ListingDetailsPayload>,
) -> Result<impl IntoResponse> {
    let listing = state
        .listing_service
        .load_listing_with_applicants(&payload.listing, &payload.credentials)
        .await?;
    Ok(Json(listing))
}

#[axum::debug_handler]
pub async fn get_job_detail(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(credentials): Json<Credentials>,
) -> Result<impl IntoResponse> {
    let detail = state
        .listing_service
        .fetch_job_detail(&credentials, &job_id)
        .await?;
    Ok(Json(detail))
}

#[axum::debug_handler]
pub async fn get_applicants(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(credentials): Json<Credentials>,
) -> Result<impl IntoResponse> {
    let applicants = state
        .listing_service
        .fetch_applicants(&credentials, &job_id)
        .await?;
    Ok(Json(applicants))
}
