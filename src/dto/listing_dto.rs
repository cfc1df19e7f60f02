use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job_listing::JobListing;
use crate::services::listing_filter::{ListingFacets, ListingFilter};

/// Upstream credentials, checked before any network call is made.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(length(min = 1, message = "API token must not be blank"))]
    pub api_token: String,
    #[validate(length(min = 1, message = "student id must not be blank"))]
    pub student_id: String,
}

impl Credentials {
    pub fn new(api_token: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            student_id: student_id.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadListingsPayload {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub filter: ListingFilter,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetailsPayload {
    #[serde(flatten)]
    pub credentials: Credentials,
    pub listing: JobListing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub items: Vec<JobListing>,
    pub total: usize,
    pub facets: ListingFacets,
}
