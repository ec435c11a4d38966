//! Calendar types (categories) that group events and give them a color

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A user's calendar category, e.g. `routine` or `school`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarType {
    /// Backend row id
    #[serde(default)]
    pub id: Option<String>,
    /// Slug used in URLs and on events
    pub type_id: String,
    pub name: String,
    pub color: String,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default = "default_true")]
    pub is_deletable: bool,
    #[serde(default)]
    pub event_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

const fn default_true() -> bool {
    true
}

/// Payload for creating a calendar type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CalendarTypeDraft {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub color: String,
}

impl CalendarTypeDraft {
    /// Create a new draft
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Check field lengths against the backend's limits
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate().map_err(DomainError::from)
    }
}

/// Partial update of a calendar type's name and/or color
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTypeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Result of deleting a calendar type; its events move to `general`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeletion {
    pub events_moved: u32,
}
