//! Calendar event (task) records
//!
//! `Event` mirrors what the backend returns; `EventDraft` and `EventUpdate`
//! are the create and partial-update payloads sent to it.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::UploadedFile;
use crate::{
    errors::DomainError,
    serde_time,
    value_objects::{EventId, FileId},
};

/// Color used by the backend for events without a calendar type
pub const DEFAULT_EVENT_COLOR: &str = "#6B7280";

const fn default_true() -> bool {
    true
}

fn default_color() -> String {
    DEFAULT_EVENT_COLOR.to_string()
}

/// An event or task as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_all_day: bool,
    #[serde(default, with = "serde_time::option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "serde_time::option")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Calendar type slug; absent when the type was deleted server-side
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// UI flag persisted by the backend (detail panel open)
    #[serde(default)]
    pub expanded: bool,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub attachment: Option<UploadedFile>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Whether the event has a start time and is not all-day
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        !self.is_all_day && self.start_time.is_some()
    }

    /// Human label for the time slot, e.g. `3PM to 5PM` or `All day`
    #[must_use]
    pub fn time_range_label(&self) -> String {
        match (self.is_all_day, self.start_time, self.end_time) {
            (false, Some(start), Some(end)) => {
                format!("{} to {}", meridiem_label(start), meridiem_label(end))
            },
            (false, Some(start), None) => meridiem_label(start),
            _ => "All day".to_string(),
        }
    }

    /// Ordering within a single day: all-day first, then by start time, then title
    #[must_use]
    pub fn cmp_within_day(&self, other: &Self) -> Ordering {
        other
            .is_all_day
            .cmp(&self.is_all_day)
            .then_with(|| match (self.start_time, other.start_time) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.title.cmp(&other.title))
    }
}

/// Format a time as `3PM` / `9:30AM`
fn meridiem_label(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    if time.minute() == 0 {
        format!("{hour}{suffix}")
    } else {
        format!("{hour}:{:02}{suffix}", time.minute())
    }
}

fn validate_links(links: &[String]) -> Result<(), ValidationError> {
    if links.iter().any(|l| l.trim().is_empty() || l.len() > 2000) {
        return Err(ValidationError::new("link_length"));
    }
    Ok(())
}

/// Payload for creating an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EventDraft {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    pub date: NaiveDate,
    pub is_all_day: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_time::option"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_time::option"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub type_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_links"))]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<FileId>,
}

impl EventDraft {
    /// Draft an all-day event
    pub fn all_day(title: impl Into<String>, date: NaiveDate, type_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date,
            is_all_day: true,
            start_time: None,
            end_time: None,
            location: String::new(),
            description: String::new(),
            type_id: type_id.into(),
            links: Vec::new(),
            attachment_id: None,
        }
    }

    /// Draft an event with a time slot
    pub fn timed(
        title: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: Option<NaiveTime>,
        type_id: impl Into<String>,
    ) -> Self {
        Self {
            is_all_day: false,
            start_time: Some(start),
            end_time: end,
            ..Self::all_day(title, date, type_id)
        }
    }

    /// Set the location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a link
    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.links.push(url.into());
        self
    }

    /// Attach a previously uploaded file
    #[must_use]
    pub const fn with_attachment(mut self, file_id: FileId) -> Self {
        self.attachment_id = Some(file_id);
        self
    }

    /// Check field lengths against the backend's limits
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate().map_err(DomainError::from)
    }
}

/// Partial update payload; `None` fields are left out of the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_time_patch"
    )]
    pub start_time: Option<Option<NaiveTime>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_time_patch"
    )]
    pub end_time: Option<Option<NaiveTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    /// `Some(None)` clears the attachment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<Option<FileId>>,
}

#[allow(clippy::ref_option, clippy::option_option)]
fn serialize_time_patch<S: serde::Serializer>(
    value: &Option<Option<NaiveTime>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serde_time::option::serialize(&value.flatten(), serializer)
}

impl EventUpdate {
    /// True when no field would be sent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Completion state returned by `PATCH /events/:id/complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionState {
    pub id: EventId,
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Link list returned after adding or removing a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLinks {
    pub links: Vec<String>,
}

/// Event listing with total count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<Event>,
    #[serde(default)]
    pub total: usize,
}
