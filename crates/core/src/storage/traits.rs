use async_trait::async_trait;
use uuid::Uuid;

use crate::calendar::{Calendar, Event};

use super::{EventFilter, Result};

/// Repository for calendar records. Each calendar embeds its sharing list,
/// so share mutations go through `update_calendar`.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Gets a calendar by its ID.
    async fn get_calendar(&self, id: Uuid) -> Result<Option<Calendar>>;

    /// Gets all calendars the user owns or that are shared with them.
    async fn list_calendars_for_user(&self, user_id: Uuid) -> Result<Vec<Calendar>>;

    /// Creates a new calendar.
    async fn create_calendar(&self, calendar: &Calendar) -> Result<()>;

    /// Updates an existing calendar.
    async fn update_calendar(&self, calendar: &Calendar) -> Result<()>;

    /// Deletes a calendar by its ID.
    async fn delete_calendar(&self, id: Uuid) -> Result<()>;
}

/// Repository for event records.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>>;

    /// Gets a calendar's events satisfying `filter`, ordered by start
    /// instant ascending.
    async fn list_events(&self, calendar_id: Uuid, filter: &EventFilter) -> Result<Vec<Event>>;

    /// Creates a new event.
    async fn create_event(&self, event: &Event) -> Result<()>;

    /// Updates an existing event.
    async fn update_event(&self, event: &Event) -> Result<()>;

    /// Deletes an event by its ID.
    async fn delete_event(&self, id: Uuid) -> Result<()>;

    /// Deletes every event belonging to a calendar, returning how many were
    /// removed. Used when a calendar's deletion cascades.
    async fn delete_events_by_calendar(&self, calendar_id: Uuid) -> Result<usize>;
}
