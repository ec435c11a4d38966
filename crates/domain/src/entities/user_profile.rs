//! User profile entity
//!
//! Represents the signed-in account with its saved addresses and the most
//! recently reported position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A reported device position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    /// Present only in the response to a location update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(flatten)]
    pub position: GeoLocation,
    /// Accuracy radius in meters
    #[serde(default)]
    pub accuracy: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// User profile with saved addresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub account_id: String,
    #[serde(default)]
    pub home_address: String,
    #[serde(default)]
    pub school_address: String,
    #[serde(default)]
    pub current_location: Option<UserLocation>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Whether both commute addresses are filled in
    #[must_use]
    pub fn has_commute_addresses(&self) -> bool {
        !self.home_address.trim().is_empty() && !self.school_address.trim().is_empty()
    }
}

/// Partial update of the profile addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_address: Option<String>,
}

/// Body of `POST /user/location`; `accuracy` is sent as `null` when unknown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationReport {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
}

impl LocationReport {
    /// Build a report from a validated position
    #[must_use]
    pub const fn new(position: GeoLocation, accuracy: Option<f64>) -> Self {
        Self {
            latitude: position.latitude(),
            longitude: position.longitude(),
            accuracy,
        }
    }
}
