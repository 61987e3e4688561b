use thiserror::Error;

use crate::storage::{DateRangeError, RepositoryError};

use super::Tier;

/// Errors that can occur when validating or manipulating calendars.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar name cannot be empty")]
    EmptyName,
    #[error("Calendar name too long (max 100 characters)")]
    NameTooLong,
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
}

/// Errors that can occur when validating or manipulating events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End date must be after or equal to start date")]
    InvalidDateRange,
    #[error("Recurrence interval must be at least 1")]
    ZeroInterval,
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
    #[error("An event cannot be moved to another calendar")]
    CalendarImmutable,
}

/// Terminal request-scoped failures surfaced by the calendar services.
///
/// Authorization and validation failures are never retried; storage failures
/// are surfaced distinctly and may be retried by the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Permission denied: {required} access required")]
    PermissionDenied { required: Tier },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Range(#[from] DateRangeError),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl ServiceError {
    /// Convenience constructor for missing-record failures.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Convenience constructor for insufficient-tier failures.
    pub fn denied(required: Tier) -> Self {
        Self::PermissionDenied { required }
    }
}
