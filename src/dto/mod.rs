pub mod lenient;
pub mod listing_dto;
pub mod upstream_dto;
