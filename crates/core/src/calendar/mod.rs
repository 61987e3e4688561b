mod access;
mod error;
mod operations;
mod recurrence;
mod types;

pub use access::resolve_tier;
pub use error::{CalendarError, EventError, ServiceError};
pub use operations::{overlaps_range, sort_events_by_start, validate_calendar, validate_event};
pub use recurrence::{generate, Occurrences};
pub use types::{
    Calendar, CalendarShare, Event, EventCategory, Frequency, Occurrence, RecurrenceRule,
    Reminder, ReminderKind, Tier, DEFAULT_COLOR,
};
