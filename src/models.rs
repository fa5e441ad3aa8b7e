use serde::{Deserialize, Serialize};

// Request and response shapes for the HTTP API.

/// Query string accepted by the destination search endpoint.
///
/// `query` is required; an empty value is allowed and matches every name.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// The envelope every API response is wrapped in.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Builds a successful response around `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
