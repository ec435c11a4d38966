//! Smart reminders shown above the day's agenda

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reminder category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Weather,
    Commute,
    Important,
    #[serde(other)]
    Other,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weather => write!(f, "weather"),
            Self::Commute => write!(f, "commute"),
            Self::Important => write!(f, "important"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A reminder card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_bg: Option<String>,
    /// Kind-specific payload (temperatures, route durations, ...)
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}
