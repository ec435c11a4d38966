//! Domain entities - records exchanged with the calendar backend

mod calendar_type;
mod commute;
mod event;
mod reminder;
mod server_time;
mod uploaded_file;
mod user_profile;

pub use calendar_type::{CalendarType, CalendarTypeDraft, CalendarTypeUpdate, TypeDeletion};
pub use commute::{Commute, CommuteEndpoint, CommutePlace, CommuteRoute, Coordinates};
pub use event::{
    CompletionState, DEFAULT_EVENT_COLOR, Event, EventDraft, EventLinks, EventList, EventUpdate,
};
pub use reminder::{Reminder, ReminderKind};
pub use server_time::ServerTime;
pub use uploaded_file::{MAX_UPLOAD_BYTES, UploadedFile};
pub use user_profile::{LocationReport, UserLocation, UserProfile, UserUpdate};
