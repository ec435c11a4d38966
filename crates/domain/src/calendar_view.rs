//! Month-grid view state
//!
//! Tracks the month being displayed and the selected date, and derives the
//! run of whole weeks that covers the month: from the start of the week
//! containing the 1st to the end of the week containing the last day.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First day of the displayed week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Weekday that opens a grid row
    #[must_use]
    pub const fn first_weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Weekday that closes a grid row
    #[must_use]
    pub const fn last_weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sat,
            Self::Monday => Weekday::Sun,
        }
    }

    /// Short column headers in display order
    #[must_use]
    pub const fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Self::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => write!(f, "sunday"),
            Self::Monday => write!(f, "monday"),
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(format!("Invalid week start: {other}. Use 'sunday' or 'monday'")),
        }
    }
}

/// First day of the month containing `date`
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the week containing `date`
#[must_use]
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = days_into_week(date, week_start);
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Last day of the week containing `date`
#[must_use]
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let remaining = 6 - days_into_week(date, week_start);
    date.checked_add_days(Days::new(remaining)).unwrap_or(date)
}

fn days_into_week(date: NaiveDate, week_start: WeekStart) -> u64 {
    let day = date.weekday().num_days_from_monday();
    let first = week_start.first_weekday().num_days_from_monday();
    u64::from((7 + day - first) % 7)
}

/// Visible month and selected date of a calendar widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    current: NaiveDate,
    selected: NaiveDate,
    week_start: WeekStart,
}

impl CalendarView {
    /// Open the view on `today`, with `today` selected
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: today,
            selected: today,
            week_start: WeekStart::default(),
        }
    }

    /// Change which weekday opens each row
    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Reference date of the visible month
    #[must_use]
    pub const fn current_date(&self) -> NaiveDate {
        self.current
    }

    #[must_use]
    pub const fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// First day of the grid (may belong to the previous month)
    #[must_use]
    pub fn grid_start(&self) -> NaiveDate {
        start_of_week(start_of_month(self.current), self.week_start)
    }

    /// Last day of the grid (may belong to the next month)
    #[must_use]
    pub fn grid_end(&self) -> NaiveDate {
        end_of_week(end_of_month(self.current), self.week_start)
    }

    /// Every day of the grid, in order, both ends inclusive
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        let end = self.grid_end();
        self.grid_start()
            .iter_days()
            .take_while(|day| *day <= end)
            .collect()
    }

    /// The grid split into rows of seven days
    #[must_use]
    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        self.days().chunks(7).map(<[NaiveDate]>::to_vec).collect()
    }

    /// Move to the next month, keeping the day where the month allows it
    pub fn next_month(&mut self) {
        if let Some(next) = self.current.checked_add_months(Months::new(1)) {
            self.current = next;
        }
    }

    /// Move to the previous month, keeping the day where the month allows it
    pub fn prev_month(&mut self) {
        if let Some(prev) = self.current.checked_sub_months(Months::new(1)) {
            self.current = prev;
        }
    }

    /// Show the month containing `date`
    pub fn go_to(&mut self, date: NaiveDate) {
        self.current = date;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Whether `date` falls in the visible month
    #[must_use]
    pub fn is_same_month(&self, date: NaiveDate) -> bool {
        date.year() == self.current.year() && date.month() == self.current.month()
    }

    /// Whether `date` is `today`; the clock is supplied by the caller
    #[must_use]
    pub fn is_today(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date == today
    }

    #[must_use]
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        date == self.selected
    }

    /// Title like `March 2026`
    #[must_use]
    pub fn title(&self) -> String {
        self.current.format("%B %Y").to_string()
    }
}
