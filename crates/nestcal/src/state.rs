//! Shared application state.
//!
//! Cloned into each request handler. Holds the two services over repository
//! trait objects, so tests and deployments can swap the storage backend.

use std::sync::Arc;

use nestcal_core::storage::{CalendarRepository, EventRepository};

use crate::{
    config::Config,
    service::{CalendarService, EventService},
    storage::InMemoryRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub calendars: CalendarService,
    pub events: EventService,
    pub config: Config,
}

impl AppState {
    /// Creates state over the given repositories.
    pub fn new(
        calendar_repo: Arc<dyn CalendarRepository>,
        event_repo: Arc<dyn EventRepository>,
        config: Config,
    ) -> Self {
        Self {
            calendars: CalendarService::new(calendar_repo.clone(), event_repo.clone()),
            events: EventService::new(calendar_repo, event_repo),
            config,
        }
    }

    /// Creates state backed by the in-memory repository.
    pub fn in_memory(config: Config) -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self::new(repo.clone(), repo, config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(Config::from_env())
    }
}
