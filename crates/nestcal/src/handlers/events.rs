//! Event CRUD and occurrence-expansion handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use nestcal_core::calendar::{Event, Occurrence};

use crate::{
    handlers::{ApiError, Principal},
    models::{CreateEvent, ListEventsQuery, OccurrencesQuery, UpdateEvent},
    state::AppState,
};

/// List a calendar's events (GET /api/calendars/{id}/events).
///
/// Supports `from`/`to` (boundary-inclusive overlap window), `childId`, and
/// `category` filters; results are ordered by start instant.
pub async fn list_events(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(calendar_id): Path<Uuid>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let filter = query.into_filter()?;
    let events = state.events.list_events(calendar_id, user, filter).await?;
    Ok(Json(events))
}

/// Create an event under a calendar (POST /api/calendars/{id}/events).
pub async fn create_event(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(calendar_id): Path<Uuid>,
    Json(payload): Json<CreateEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .events
        .create_event(calendar_id, user, payload.into_event(calendar_id))
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Get a single event by ID (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = state.events.get_event(id, user).await?;
    Ok(Json(event))
}

/// Patch an event by ID (PATCH /api/events/{id}).
pub async fn update_event(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEvent>,
) -> Result<Json<Event>, ApiError> {
    let event = state.events.update_event(id, user, payload).await?;
    Ok(Json(event))
}

/// Delete an event by ID (DELETE /api/events/{id}).
pub async fn delete_event(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.events.delete_event(id, user).await?;
    Ok(StatusCode::OK)
}

/// Expand a recurring event (GET /api/events/{id}/occurrences?count=N).
///
/// `count` defaults from configuration and is clamped to the configured
/// maximum.
pub async fn get_occurrences(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
    Query(query): Query<OccurrencesQuery>,
) -> Result<Json<Vec<Occurrence>>, ApiError> {
    let count = query
        .count
        .unwrap_or(state.config.default_occurrences)
        .min(state.config.max_occurrences)
        .max(1);

    let occurrences = state.events.get_occurrences(id, user, count).await?;
    Ok(Json(occurrences))
}
