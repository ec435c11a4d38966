//! Value Objects - Immutable, identity-less domain primitives

mod event_id;
mod file_id;
mod geo_location;

pub use event_id::EventId;
pub use file_id::FileId;
pub use geo_location::GeoLocation;
