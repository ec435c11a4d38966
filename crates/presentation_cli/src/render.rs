//! Plain-text month grid

use std::fmt::Write;

use application::MonthAgenda;
use chrono::Datelike;

/// Render the grid followed by the events of the month
///
/// `*` marks today, `>` the selected day, and a trailing count the pending
/// events. Days outside the month are dotted out.
pub fn render_month(agenda: &MonthAgenda) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", agenda.title);

    for label in agenda.week_start.weekday_labels() {
        let _ = write!(out, "{label:>5} ");
    }
    out.push('\n');

    for week in agenda.weeks() {
        for day in week {
            let cell = if day.in_current_month {
                let mark = if day.is_today {
                    '*'
                } else if day.is_selected {
                    '>'
                } else {
                    ' '
                };
                match day.pending_count() {
                    0 => format!("{mark}{:>2}", day.date.day()),
                    n => format!("{mark}{:>2}+{}", day.date.day(), n.min(9)),
                }
            } else {
                "  .".to_string()
            };
            let _ = write!(out, "{cell:>5} ");
        }
        out.push('\n');
    }

    let listed = agenda
        .days
        .iter()
        .filter(|d| d.in_current_month && !d.events.is_empty());
    for day in listed {
        out.push('\n');
        for event in &day.events {
            let check = if event.completed { "[x]" } else { "[ ]" };
            let _ = write!(
                out,
                "{}  {:<14} {check} {}",
                day.date,
                event.time_range_label(),
                event.title
            );
            if let Some(type_id) = &event.type_id {
                let _ = write!(out, " ({type_id})");
            }
            out.push('\n');
        }
    }

    if !agenda.hidden_types.is_empty() {
        let _ = writeln!(out, "\nHidden: {}", agenda.hidden_types.join(", "));
    }
    out
}
