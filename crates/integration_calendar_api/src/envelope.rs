//! Response envelope shared by every backend endpoint

use domain::UserProfile;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// `{ success, data?, message?, server_time? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_time: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Take the payload, failing if the backend sent none
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingData` naming `endpoint` when `data` is absent
    /// or null.
    pub fn into_data(self, endpoint: &str) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::MissingData(endpoint.to_string()))
    }

    /// Transform the payload, keeping the envelope metadata
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            server_time: self.server_time,
        }
    }
}

/// Payload of a successful login
#[derive(Debug, Deserialize)]
pub struct LoginSession {
    pub access_token: SecretString,
    /// Token lifetime in seconds
    pub expires_in: u64,
    #[serde(default)]
    pub is_new_user: bool,
    pub user: UserProfile,
}
