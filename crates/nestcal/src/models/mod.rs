//! Request payloads for the HTTP API.
//!
//! Thin deserialization types that convert into (or patch) the core domain
//! types; the wire format is camelCase JSON.

mod calendar;
mod event;

pub use calendar::{CreateCalendar, ShareRequest, UpdateCalendar};
pub use event::{CreateEvent, ListEventsQuery, OccurrencesQuery, UpdateEvent};
