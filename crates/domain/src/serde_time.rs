//! Serde helpers for wall-clock times
//!
//! The backend emits `HH:MM:SS` while fixtures and user input use `HH:MM`.
//! Both are accepted on input; output is always `HH:MM`.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::DomainError;

/// Parse `HH:MM` or `HH:MM:SS` (fractional seconds allowed)
pub fn parse_time(input: &str) -> Result<NaiveTime, DomainError> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| DomainError::InvalidDateTime(input.to_string()))
}

/// Format a time as `HH:MM`
pub fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `Option<NaiveTime>` field adapter, for `#[serde(with = "...")]`
pub mod option {
    use super::{Deserialize, Deserializer, NaiveTime, Serializer, format_time, parse_time};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&format_time(t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_time(s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
