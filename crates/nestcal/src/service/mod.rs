//! Orchestration layer: enforces access-control tiers around calendar and
//! event lifecycle, then issues explicit repository calls.
//!
//! Decision logic stays in `nestcal_core` as pure functions over immutable
//! snapshots; these services load a snapshot, decide, mutate, and save.

mod calendars;
mod events;

pub use calendars::CalendarService;
pub use events::EventService;

use nestcal_core::calendar::{resolve_tier, Calendar, ServiceError, Tier};
use uuid::Uuid;

/// Resolves the principal's tier on `calendar` and requires at least
/// `required`, logging the denial otherwise.
fn require_tier(calendar: &Calendar, principal: Uuid, required: Tier) -> Result<Tier, ServiceError> {
    let tier = resolve_tier(calendar, principal);
    if tier >= required {
        Ok(tier)
    } else {
        tracing::warn!(
            calendar_id = %calendar.id,
            user_id = %principal,
            tier = %tier,
            required = %required,
            "Authorization denied"
        );
        Err(ServiceError::denied(required))
    }
}
