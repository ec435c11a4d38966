//! Backend clock reading

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    pub server_time: DateTime<Utc>,
    pub timezone: String,
    pub date: NaiveDate,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl ServerTime {
    /// Offset of the local clock relative to the server, in milliseconds
    #[must_use]
    pub fn skew_millis(&self, local_now: DateTime<Utc>) -> i64 {
        local_now.timestamp_millis() - self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_clock_skew() {
        let json = r#"{
            "server_time": "2026-03-14T08:00:00+00:00",
            "timezone": "UTC",
            "date": "2026-03-14",
            "timestamp": 1773475200000
        }"#;
        let time: ServerTime = serde_json::from_str(json).unwrap();
        assert_eq!(time.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        let local = time.server_time + chrono::Duration::milliseconds(1500);
        assert_eq!(time.skew_millis(local), 1500);
    }
}
