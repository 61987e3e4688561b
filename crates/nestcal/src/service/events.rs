use std::sync::Arc;

use uuid::Uuid;

use nestcal_core::calendar::{
    generate, validate_event, Calendar, Event, Occurrence, ServiceError, Tier,
};
use nestcal_core::storage::{CalendarRepository, EventFilter, EventRepository};

use crate::models::UpdateEvent;

use super::require_tier;

/// Event lifecycle and occurrence queries, guarded by the owning calendar's
/// access-control tiers.
#[derive(Clone)]
pub struct EventService {
    calendars: Arc<dyn CalendarRepository>,
    events: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(calendars: Arc<dyn CalendarRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { calendars, events }
    }

    async fn load_calendar(&self, id: Uuid) -> Result<Calendar, ServiceError> {
        self.calendars
            .get_calendar(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Calendar", id))
    }

    async fn load_event(&self, id: Uuid) -> Result<Event, ServiceError> {
        self.events
            .get_event(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id))
    }

    /// A calendar's events matching `filter`, ordered by start ascending.
    /// Requires any access tier; an unknown calendar is `NotFound` before
    /// any permission check.
    pub async fn list_events(
        &self,
        calendar_id: Uuid,
        principal: Uuid,
        filter: EventFilter,
    ) -> Result<Vec<Event>, ServiceError> {
        let calendar = self.load_calendar(calendar_id).await?;
        require_tier(&calendar, principal, Tier::Read)?;

        Ok(self.events.list_events(calendar_id, &filter).await?)
    }

    /// A single event, requiring any access tier on its calendar.
    pub async fn get_event(&self, event_id: Uuid, principal: Uuid) -> Result<Event, ServiceError> {
        let event = self.load_event(event_id).await?;
        let calendar = self.load_calendar(event.calendar_id).await?;
        require_tier(&calendar, principal, Tier::Read)?;

        Ok(event)
    }

    /// Creates an event under `calendar_id`, requiring write access. Any
    /// calendar id carried by the draft is overwritten.
    pub async fn create_event(
        &self,
        calendar_id: Uuid,
        principal: Uuid,
        mut event: Event,
    ) -> Result<Event, ServiceError> {
        let calendar = self.load_calendar(calendar_id).await?;
        require_tier(&calendar, principal, Tier::Write)?;

        event.calendar_id = calendar_id;
        validate_event(&event)?;
        self.events.create_event(&event).await?;

        tracing::info!(event_id = %event.id, calendar_id = %calendar_id, "Created event");
        Ok(event)
    }

    /// Applies a patch to an event, requiring write access on its calendar.
    /// A patch that tries to move the event to another calendar is rejected.
    pub async fn update_event(
        &self,
        event_id: Uuid,
        principal: Uuid,
        patch: UpdateEvent,
    ) -> Result<Event, ServiceError> {
        let mut event = self.load_event(event_id).await?;
        let calendar = self.load_calendar(event.calendar_id).await?;
        require_tier(&calendar, principal, Tier::Write)?;

        patch.apply_to(&mut event)?;
        validate_event(&event)?;
        self.events.update_event(&event).await?;

        tracing::info!(event_id = %event_id, "Updated event");
        Ok(event)
    }

    /// Permanently removes an event, requiring write access on its calendar.
    pub async fn delete_event(&self, event_id: Uuid, principal: Uuid) -> Result<(), ServiceError> {
        let event = self.load_event(event_id).await?;
        let calendar = self.load_calendar(event.calendar_id).await?;
        require_tier(&calendar, principal, Tier::Write)?;

        self.events.delete_event(event_id).await?;

        tracing::info!(event_id = %event_id, "Deleted event");
        Ok(())
    }

    /// Expands an event's recurrence into at most `count` occurrences.
    /// Requires any access tier on the owning calendar.
    pub async fn get_occurrences(
        &self,
        event_id: Uuid,
        principal: Uuid,
        count: usize,
    ) -> Result<Vec<Occurrence>, ServiceError> {
        let event = self.load_event(event_id).await?;
        let calendar = self.load_calendar(event.calendar_id).await?;
        require_tier(&calendar, principal, Tier::Read)?;

        Ok(generate(&event, count))
    }
}
