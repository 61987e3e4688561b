//! Calendar CRUD and sharing handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use nestcal_core::calendar::Calendar;

use crate::{
    handlers::{ApiError, Principal},
    models::{CreateCalendar, ShareRequest, UpdateCalendar},
    state::AppState,
};

/// List the principal's own and shared calendars (GET /api/calendars).
pub async fn list_calendars(
    State(state): State<AppState>,
    Principal(user): Principal,
) -> Result<Json<Vec<Calendar>>, ApiError> {
    let calendars = state.calendars.list_calendars(user).await?;
    Ok(Json(calendars))
}

/// Create a new calendar (POST /api/calendars).
pub async fn create_calendar(
    State(state): State<AppState>,
    Principal(user): Principal,
    Json(payload): Json<CreateCalendar>,
) -> Result<impl IntoResponse, ApiError> {
    let calendar = state
        .calendars
        .create_calendar(user, payload.into_calendar(user))
        .await?;

    Ok((StatusCode::CREATED, Json(calendar)))
}

/// Get a single calendar by ID (GET /api/calendars/{id}).
pub async fn get_calendar(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
) -> Result<Json<Calendar>, ApiError> {
    let calendar = state.calendars.get_calendar(id, user).await?;
    Ok(Json(calendar))
}

/// Patch a calendar by ID (PATCH /api/calendars/{id}).
pub async fn update_calendar(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCalendar>,
) -> Result<Json<Calendar>, ApiError> {
    let calendar = state.calendars.update_calendar(id, user, payload).await?;
    Ok(Json(calendar))
}

/// Delete a calendar and its events (DELETE /api/calendars/{id}).
pub async fn delete_calendar(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.calendars.delete_calendar(id, user).await?;
    Ok(StatusCode::OK)
}

/// Grant or update a share (POST /api/calendars/{id}/share).
pub async fn share_calendar(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShareRequest>,
) -> Result<Json<Calendar>, ApiError> {
    let calendar = state
        .calendars
        .share_calendar(id, user, payload.user_id, payload.tier)
        .await?;
    Ok(Json(calendar))
}

/// Revoke a share (DELETE /api/calendars/{id}/share/{userId}).
pub async fn remove_share(
    State(state): State<AppState>,
    Principal(user): Principal,
    Path((id, shared_user)): Path<(Uuid, Uuid)>,
) -> Result<Json<Calendar>, ApiError> {
    let calendar = state.calendars.remove_share(id, user, shared_user).await?;
    Ok(Json(calendar))
}
