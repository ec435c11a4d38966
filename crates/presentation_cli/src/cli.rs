//! Command-line definitions

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use domain::{CommutePlace, EventId, FileId, WeekStart, serde_time};

/// Jarvis Calendar CLI
#[derive(Debug, Parser)]
#[command(name = "jarvis-cli")]
#[command(author, version, about = "Jarvis Calendar command-line client", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding configuration and JARVIS_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in with an account id and keep the token
    Login {
        account_id: String,
    },

    /// Sign out and forget the token
    Logout,

    /// Show the backend clock
    Time,

    /// Profile and location
    #[command(subcommand)]
    User(UserCommand),

    /// Calendar types
    #[command(subcommand)]
    Types(TypesCommand),

    /// Events and tasks
    #[command(subcommand)]
    Events(EventsCommand),

    /// Attachments
    #[command(subcommand)]
    Files(FilesCommand),

    /// Reminder cards for a day
    Reminders {
        /// Day to show (backend's today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Commute between saved places
    Commute {
        #[arg(long, default_value = "home")]
        from: CommutePlace,

        #[arg(long, default_value = "school")]
        to: CommutePlace,
    },

    /// Print the month grid with its events
    Month {
        /// Any day of the month to show (today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// First column of the grid: sun or mon
        #[arg(long, default_value = "sun")]
        week_start: WeekStart,

        /// Print the agenda as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in sample tasks and reminders
    Mock {
        /// Date to put the sample tasks on (today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Older unversioned API
    #[command(subcommand)]
    Legacy(LegacyCommand),
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Show the profile
    Show,

    /// Change saved addresses
    Update {
        #[arg(long)]
        home: Option<String>,

        #[arg(long)]
        school: Option<String>,
    },

    /// Show the last reported location
    Location,

    /// Report the current location
    SetLocation {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Accuracy in meters
        #[arg(long)]
        accuracy: Option<f64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TypesCommand {
    /// List all calendar types
    List,

    /// Create a calendar type
    Create {
        name: String,

        #[arg(long, default_value = domain::DEFAULT_EVENT_COLOR)]
        color: String,
    },

    /// Rename or recolor a calendar type
    Update {
        type_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Make a calendar type visible
    Show {
        type_id: String,
    },

    /// Hide a calendar type
    Hide {
        type_id: String,
    },

    /// Delete a calendar type; its events move to `general`
    Delete {
        type_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List events matching the filters
    List {
        #[arg(long, conflicts_with_all = ["from", "to"])]
        date: Option<NaiveDate>,

        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long = "type")]
        type_id: Option<String>,

        #[arg(long)]
        completed: Option<bool>,
    },

    /// Show one event
    Get {
        id: EventId,
    },

    /// Create an event; all-day unless --start is given
    Create {
        title: String,

        #[arg(long)]
        date: NaiveDate,

        #[arg(long, value_parser = parse_hh_mm)]
        start: Option<NaiveTime>,

        #[arg(long, value_parser = parse_hh_mm, requires = "start")]
        end: Option<NaiveTime>,

        #[arg(long = "type", default_value = "general")]
        type_id: String,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "link")]
        links: Vec<String>,

        #[arg(long)]
        attachment: Option<FileId>,
    },

    /// Change fields of an event
    Update {
        id: EventId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, value_parser = parse_hh_mm)]
        start: Option<NaiveTime>,

        #[arg(long, value_parser = parse_hh_mm)]
        end: Option<NaiveTime>,

        /// Make the event all-day and clear its times
        #[arg(long, conflicts_with_all = ["start", "end"])]
        all_day: bool,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "type")]
        type_id: Option<String>,

        #[arg(long, conflicts_with = "clear_attachment")]
        attachment: Option<FileId>,

        #[arg(long)]
        clear_attachment: bool,
    },

    /// Delete an event
    Delete {
        id: EventId,
    },

    /// Mark an event done
    Complete {
        id: EventId,

        /// Mark it not done instead
        #[arg(long)]
        undo: bool,
    },

    /// Attach a link
    Link {
        id: EventId,
        url: String,
    },

    /// Remove a link
    Unlink {
        id: EventId,
        url: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// Upload a file (at most 10 MiB)
    Upload {
        path: PathBuf,

        #[arg(long)]
        mime_type: Option<String>,
    },

    /// Delete an uploaded file
    Delete {
        id: FileId,
    },
}

#[derive(Debug, Subcommand)]
pub enum LegacyCommand {
    Events,
    Types,
    Reminders,
}

fn parse_hh_mm(value: &str) -> Result<NaiveTime, String> {
    serde_time::parse_time(value).map_err(|e| e.to_string())
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
