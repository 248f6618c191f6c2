//! Response DTOs.
//!
//! Bodies carry their HTTP status as `statusCode` alongside the payload.

use serde::{Deserialize, Serialize};

/// Message-only response, as returned by login and logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
    /// Numeric HTTP status.
    pub status_code: u16,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

/// Response carrying a payload and an optional message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse<T> {
    /// Numeric HTTP status.
    pub status_code: u16,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload.
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// 200 with data only.
    pub fn ok(data: T) -> Self {
        Self {
            status_code: 200,
            message: None,
            data,
        }
    }

    /// 201 with a confirmation message.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 201,
            message: Some(message.into()),
            data,
        }
    }
}

/// Authentication status of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Caller email, empty when unauthenticated.
    pub email: String,
    /// Whether a valid session was presented.
    pub authenticated: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}
