//! Static sample data for running without a backend
//!
//! All sample tasks fall on the date passed in, so the agenda for "today"
//! is never empty in local development.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::entities::CalendarType;

/// Attachment reference on a sample task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockAttachment {
    pub name: &'static str,
    pub url: &'static str,
}

/// A sample task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockTask {
    pub id: &'static str,
    pub title: &'static str,
    pub is_all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<&'static str>,
    pub date: NaiveDate,
    pub color: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<MockAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// A sample reminder card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockReminder {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub icon_color: &'static str,
}

fn hm(hour: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0)
}

/// The four sample tasks, dated `today`
#[must_use]
pub fn mock_tasks(today: NaiveDate) -> Vec<MockTask> {
    vec![
        MockTask {
            id: "1",
            title: "KAI BIRTHDAY TOMORROW",
            is_all_day: true,
            start_time: None,
            end_time: None,
            time_range: None,
            date: today,
            color: "#F59E0B",
            completed: false,
            attachment: None,
            location: None,
            kind: "event",
        },
        MockTask {
            id: "2",
            title: "SIGN UP TO UNI",
            is_all_day: true,
            start_time: None,
            end_time: None,
            time_range: None,
            date: today,
            color: "#F59E0B",
            completed: true,
            attachment: Some(MockAttachment {
                name: "Docs.pdf",
                url: "#",
            }),
            location: None,
            kind: "event",
        },
        MockTask {
            id: "3",
            title: "Therapy",
            is_all_day: false,
            start_time: hm(15),
            end_time: hm(17),
            time_range: Some("3PM to 5PM"),
            date: today,
            color: "#EC4899",
            completed: false,
            attachment: None,
            location: Some("Clinic"),
            kind: "routine",
        },
        MockTask {
            id: "4",
            title: "School Project",
            is_all_day: false,
            start_time: hm(9),
            end_time: hm(12),
            time_range: Some("9AM to 12PM"),
            date: today,
            color: "#22C55E",
            completed: false,
            attachment: None,
            location: None,
            kind: "school",
        },
    ]
}

/// The three sample reminder cards
#[must_use]
pub fn mock_reminders() -> Vec<MockReminder> {
    vec![
        MockReminder {
            id: "weather",
            kind: "weather",
            title: "今日天气",
            subtitle: "多云转晴, 18°C - 25°C, 适合外出",
            icon: "cloud",
            color: "#EAF2FD",
            icon_color: "#3B82F6",
        },
        MockReminder {
            id: "commute",
            kind: "commute",
            title: "通勤信息",
            subtitle: "前往学校约需 25 分钟，距离 8.5 公里",
            icon: "navigation",
            color: "#E8F5E9",
            icon_color: "#22C55E",
        },
        MockReminder {
            id: "birthday",
            kind: "important",
            title: "重要提醒",
            subtitle: "明天是 Kai 的生日，记得准备礼物 🎁",
            icon: "calendar",
            color: "#FCE4EC",
            icon_color: "#EC4899",
        },
    ]
}

/// Calendar types a new account starts with; `general` cannot be deleted
#[must_use]
pub fn default_calendar_types() -> Vec<CalendarType> {
    [
        ("general", "General", "#6B7280", false),
        ("routine", "Routine", "#EC4899", true),
        ("events", "Events", "#F59E0B", true),
        ("holidays", "Holidays", "#3B82F6", true),
        ("school", "School", "#22C55E", true),
    ]
    .into_iter()
    .map(|(type_id, name, color, is_deletable)| CalendarType {
        id: None,
        type_id: type_id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        is_visible: true,
        is_deletable,
        event_count: 0,
        created_at: None,
        updated_at: None,
    })
    .collect()
}
