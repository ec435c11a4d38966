//! Adapters implementing application ports and client seams

mod calendar_api_adapter;
mod file_token_store;

pub use calendar_api_adapter::CalendarApiAdapter;
pub use file_token_store::FileTokenStore;
