pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::UpstreamConfig;
use crate::error::Result;
use crate::services::{listing_service::ListingService, readytalent_client::ReadyTalentClient};

#[derive(Clone)]
pub struct AppState {
    pub listing_service: ListingService,
}

impl AppState {
    pub fn new(upstream: UpstreamConfig) -> Result<Self> {
        let client = ReadyTalentClient::new(upstream)?;
        Ok(Self {
            listing_service: ListingService::new(client),
        })
    }
}
