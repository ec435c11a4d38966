//! Latitude/longitude pair reported by the device or stored on a profile

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A point on the earth's surface, in degrees
///
/// Serializes as `{"latitude": .., "longitude": ..}`, the shape the backend
/// uses in `/user/location` and the profile's `current_location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` when either value is out of
    /// range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let lat_ok = latitude.abs() <= 90.0;
        let lon_ok = longitude.abs() <= 180.0;
        if lat_ok && lon_ok {
            Ok(Self { latitude, longitude })
        } else {
            Err(DomainError::InvalidCoordinates { latitude, longitude })
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
