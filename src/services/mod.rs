pub mod listing_filter;
pub mod listing_service;
pub mod readytalent_client;
pub mod response_classifier;
