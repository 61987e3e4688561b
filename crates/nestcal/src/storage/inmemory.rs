//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use nestcal_core::calendar::{sort_events_by_start, Calendar, Event};
use nestcal_core::storage::{
    CalendarRepository, EventFilter, EventRepository, RepositoryError, Result,
};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access. Each
/// mutation takes the write lock for its record map, which serializes
/// concurrent edits of the same record; reads run in parallel. Data is not
/// persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    calendars: Arc<RwLock<HashMap<Uuid, Calendar>>>,
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CalendarRepository for InMemoryRepository {
    async fn get_calendar(&self, id: Uuid) -> Result<Option<Calendar>> {
        let calendars = self.calendars.read().await;
        Ok(calendars.get(&id).cloned())
    }

    async fn list_calendars_for_user(&self, user_id: Uuid) -> Result<Vec<Calendar>> {
        let calendars = self.calendars.read().await;
        Ok(calendars
            .values()
            .filter(|c| {
                c.owner_id == user_id || c.shares.iter().any(|share| share.user_id == user_id)
            })
            .cloned()
            .collect())
    }

    async fn create_calendar(&self, calendar: &Calendar) -> Result<()> {
        let mut calendars = self.calendars.write().await;
        if calendars.contains_key(&calendar.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Calendar",
                id: calendar.id.to_string(),
            });
        }
        calendars.insert(calendar.id, calendar.clone());
        Ok(())
    }

    async fn update_calendar(&self, calendar: &Calendar) -> Result<()> {
        let mut calendars = self.calendars.write().await;
        if !calendars.contains_key(&calendar.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Calendar",
                id: calendar.id.to_string(),
            });
        }
        calendars.insert(calendar.id, calendar.clone());
        Ok(())
    }

    async fn delete_calendar(&self, id: Uuid) -> Result<()> {
        let mut calendars = self.calendars.write().await;
        if calendars.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Calendar",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list_events(&self, calendar_id: Uuid, filter: &EventFilter) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut matches: Vec<Event> = events
            .values()
            .filter(|e| e.calendar_id == calendar_id)
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        sort_events_by_start(&mut matches);
        Ok(matches)
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        if events.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_events_by_calendar(&self, calendar_id: Uuid) -> Result<usize> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|_, e| e.calendar_id != calendar_id);
        Ok(before - events.len())
    }
}
