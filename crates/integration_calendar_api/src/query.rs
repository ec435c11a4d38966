//! Query-string building

use chrono::NaiveDate;
use url::form_urlencoded;

/// Encode `pairs` in order; `None` when there is nothing to send
#[must_use]
pub fn encode_pairs<K, V>(pairs: &[(K, V)]) -> Option<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return None;
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    Some(serializer.finish())
}

/// Filters for `GET /events`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub type_id: Option<String>,
    pub completed: Option<bool>,
}

impl EventQuery {
    /// No filters: every event of the user
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events on a single day
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Events between `start` and `end`, both inclusive
    #[must_use]
    pub fn for_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_id: impl Into<String>) -> Self {
        self.type_id = Some(type_id.into());
        self
    }

    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Present filters in wire order
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(date) = self.date {
            pairs.push(("date", date.to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.to_string()));
        }
        if let Some(type_id) = self.type_id.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("type_id", type_id.to_string()));
        }
        if let Some(completed) = self.completed {
            pairs.push(("completed", completed.to_string()));
        }
        pairs
    }

    /// Encoded query string without the leading `?`
    #[must_use]
    pub fn to_query_string(&self) -> Option<String> {
        encode_pairs(&self.pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_query_has_no_string() {
        assert_eq!(EventQuery::new().to_query_string(), None);
        assert!(EventQuery::new().pairs().is_empty());
    }

    #[test]
    fn range_query() {
        let query = EventQuery::for_range(date(2026, 3, 1), date(2026, 4, 4));
        assert_eq!(
            query.to_query_string().as_deref(),
            Some("start_date=2026-03-01&end_date=2026-04-04")
        );
    }

    #[test]
    fn false_completed_is_sent() {
        let query = EventQuery::on(date(2026, 3, 14)).with_completed(false);
        assert_eq!(
            query.to_query_string().as_deref(),
            Some("date=2026-03-14&completed=false")
        );
    }

    #[test]
    fn empty_type_is_omitted() {
        let query = EventQuery::new().with_type("");
        assert_eq!(query.to_query_string(), None);
    }

    #[test]
    fn values_are_encoded_in_fixed_order() {
        let query = EventQuery {
            completed: Some(true),
            type_id: Some("school & work".to_string()),
            date: Some(date(2026, 3, 14)),
            ..EventQuery::default()
        };
        assert_eq!(
            query.to_query_string().as_deref(),
            Some("date=2026-03-14&type_id=school+%26+work&completed=true")
        );
    }

    #[test]
    fn encode_pairs_escapes_reserved_characters() {
        assert_eq!(
            encode_pairs(&[("from", "home?"), ("to", "a=b")]).as_deref(),
            Some("from=home%3F&to=a%3Db")
        );
        assert_eq!(encode_pairs::<&str, &str>(&[]), None);
    }
}
