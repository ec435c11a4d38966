//! Commute information between the user's saved places

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A saved place a commute can start or end at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommutePlace {
    #[default]
    Home,
    School,
}

impl CommutePlace {
    /// Query-string value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::School => "school",
        }
    }
}

impl fmt::Display for CommutePlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommutePlace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "school" => Ok(Self::School),
            other => Err(DomainError::ValidationError(format!(
                "unknown commute place '{other}', expected 'home' or 'school'"
            ))),
        }
    }
}

/// Coordinates in the backend's short `lat`/`lng` form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One end of a commute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteEndpoint {
    #[serde(rename = "type")]
    pub place: String,
    #[serde(default)]
    pub address: String,
    pub coordinates: Coordinates,
}

/// A route option for the commute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteRoute {
    /// `driving`, `transit`, ...
    pub mode: String,
    pub duration_minutes: u32,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_details: Option<String>,
}

impl fmt::Display for CommuteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} min, {:.1} km",
            self.mode, self.duration_minutes, self.distance_km
        )?;
        if let Some(details) = &self.transit_details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

/// Response of `GET /location/commute`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commute {
    pub from: CommuteEndpoint,
    pub to: CommuteEndpoint,
    #[serde(default)]
    pub routes: Vec<CommuteRoute>,
    #[serde(default)]
    pub maps_url: Option<String>,
}

impl Commute {
    /// The route with the shortest duration
    #[must_use]
    pub fn fastest_route(&self) -> Option<&CommuteRoute> {
        self.routes.iter().min_by_key(|r| r.duration_minutes)
    }
}
