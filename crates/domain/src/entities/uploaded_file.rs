//! Uploaded attachment metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::FileId;

/// Largest upload the backend accepts
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// An attachment stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: FileId,
    /// Original file name
    pub name: String,
    /// Absolute download URL, when the backend could build one
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
