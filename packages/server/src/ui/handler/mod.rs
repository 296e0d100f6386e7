//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{get_hotel_detail, health_check, list_hotels};
