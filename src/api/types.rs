// API types module
// Request/response payloads for the keyword API

use serde::{Deserialize, Serialize};

/// Response for GET /api/boot-image-select
#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub success: bool,
    #[serde(rename = "BootImageSelected")]
    pub boot_image_selected: String,
    pub timestamp: String,
}

/// Response for GET /api/status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub status: &'static str,
    #[serde(rename = "BootImageSelected")]
    pub boot_image_selected: String,
    /// Seconds since server start
    pub uptime: f64,
    pub timestamp: String,
    pub version: &'static str,
}

/// Response for a successful POST /api/set-vhd
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(rename = "BootImageSelected")]
    pub boot_image_selected: String,
    pub message: String,
}

/// Error payload shared by all failing responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Request body for POST /api/set-vhd.
/// A missing field is treated as empty input and rejected by validation.
#[derive(Debug, Deserialize)]
pub struct SetVhdRequest {
    #[serde(rename = "BootImageSelected", default)]
    pub boot_image_selected: String,
}
