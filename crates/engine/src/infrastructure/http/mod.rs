//! HTTP route handlers.

pub mod character_routes;
pub mod item_routes;

use serde::Serialize;

/// Plain confirmation body used by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
