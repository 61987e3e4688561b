use std::sync::Arc;

use uuid::Uuid;

use nestcal_core::calendar::{validate_calendar, Calendar, ServiceError, Tier};
use nestcal_core::storage::{CalendarRepository, EventRepository};

use crate::models::UpdateCalendar;

use super::require_tier;

/// Calendar lifecycle and sharing, guarded by access-control tiers.
#[derive(Clone)]
pub struct CalendarService {
    calendars: Arc<dyn CalendarRepository>,
    events: Arc<dyn EventRepository>,
}

impl CalendarService {
    pub fn new(calendars: Arc<dyn CalendarRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { calendars, events }
    }

    async fn load(&self, id: Uuid) -> Result<Calendar, ServiceError> {
        self.calendars
            .get_calendar(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Calendar", id))
    }

    /// All calendars the principal owns or has been granted access to.
    pub async fn list_calendars(&self, principal: Uuid) -> Result<Vec<Calendar>, ServiceError> {
        Ok(self.calendars.list_calendars_for_user(principal).await?)
    }

    /// A single calendar, requiring any access tier.
    pub async fn get_calendar(&self, id: Uuid, principal: Uuid) -> Result<Calendar, ServiceError> {
        let calendar = self.load(id).await?;
        require_tier(&calendar, principal, Tier::Read)?;
        Ok(calendar)
    }

    /// Creates a calendar owned by the principal.
    pub async fn create_calendar(
        &self,
        principal: Uuid,
        mut calendar: Calendar,
    ) -> Result<Calendar, ServiceError> {
        calendar.owner_id = principal;
        validate_calendar(&calendar)?;
        self.calendars.create_calendar(&calendar).await?;

        tracing::info!(calendar_id = %calendar.id, name = %calendar.name, "Created calendar");
        Ok(calendar)
    }

    /// Applies a patch to a calendar, requiring write access. The owner and
    /// the sharing list are not patchable; sharing goes through
    /// [`CalendarService::share_calendar`].
    pub async fn update_calendar(
        &self,
        id: Uuid,
        principal: Uuid,
        patch: UpdateCalendar,
    ) -> Result<Calendar, ServiceError> {
        let mut calendar = self.load(id).await?;
        require_tier(&calendar, principal, Tier::Write)?;

        patch.apply_to(&mut calendar);
        validate_calendar(&calendar)?;
        self.calendars.update_calendar(&calendar).await?;

        tracing::info!(calendar_id = %id, "Updated calendar");
        Ok(calendar)
    }

    /// Deletes a calendar and every event it owns. Admin only.
    pub async fn delete_calendar(&self, id: Uuid, principal: Uuid) -> Result<(), ServiceError> {
        let calendar = self.load(id).await?;
        require_tier(&calendar, principal, Tier::Admin)?;

        self.calendars.delete_calendar(id).await?;
        let removed = self.events.delete_events_by_calendar(id).await?;

        tracing::info!(calendar_id = %id, events_removed = removed, "Deleted calendar");
        Ok(())
    }

    /// Grants or updates a share. Admin only; the owner cannot be added.
    pub async fn share_calendar(
        &self,
        id: Uuid,
        principal: Uuid,
        user_id: Uuid,
        tier: Tier,
    ) -> Result<Calendar, ServiceError> {
        let mut calendar = self.load(id).await?;
        require_tier(&calendar, principal, Tier::Admin)?;

        calendar.upsert_share(user_id, tier)?;
        self.calendars.update_calendar(&calendar).await?;

        tracing::info!(calendar_id = %id, user_id = %user_id, tier = %tier, "Shared calendar");
        Ok(calendar)
    }

    /// Revokes a user's share. Admin only; succeeds even when no share
    /// exists.
    pub async fn remove_share(
        &self,
        id: Uuid,
        principal: Uuid,
        user_id: Uuid,
    ) -> Result<Calendar, ServiceError> {
        let mut calendar = self.load(id).await?;
        require_tier(&calendar, principal, Tier::Admin)?;

        calendar.remove_share(user_id);
        self.calendars.update_calendar(&calendar).await?;

        tracing::info!(calendar_id = %id, user_id = %user_id, "Removed calendar share");
        Ok(calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::EventService;
    use crate::storage::InMemoryRepository;
    use chrono::{Duration, TimeZone, Utc};
    use nestcal_core::calendar::Event;
    use nestcal_core::storage::EventFilter;

    fn services() -> (CalendarService, EventService, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::new());
        let calendars = CalendarService::new(repo.clone(), repo.clone());
        let events = EventService::new(repo.clone(), repo.clone());
        (calendars, events, repo)
    }

    async fn seed_calendar(service: &CalendarService, owner: Uuid) -> Calendar {
        service
            .create_calendar(owner, Calendar::new(owner, "Family"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_forces_owner_to_principal() {
        let (service, _, _) = services();
        let principal = Uuid::new_v4();
        let draft = Calendar::new(Uuid::new_v4(), "Family");

        let created = service.create_calendar(principal, draft).await.unwrap();

        assert_eq!(created.owner_id, principal);
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft() {
        let (service, _, _) = services();
        let principal = Uuid::new_v4();

        let result = service
            .create_calendar(principal, Calendar::new(principal, "  "))
            .await;

        assert!(matches!(result, Err(ServiceError::Calendar(_))));
    }

    #[tokio::test]
    async fn get_requires_membership() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;

        assert!(service.get_calendar(calendar.id, owner).await.is_ok());

        let stranger = Uuid::new_v4();
        let result = service.get_calendar(calendar.id, stranger).await;
        assert!(matches!(result, Err(ServiceError::PermissionDenied { .. })));
    }

    #[tokio::test]
    async fn get_unknown_calendar_is_not_found() {
        let (service, _, _) = services();

        let result = service.get_calendar(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_requires_write_tier() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let reader = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;
        service
            .share_calendar(calendar.id, owner, reader, Tier::Read)
            .await
            .unwrap();

        let patch = UpdateCalendar {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let result = service.update_calendar(calendar.id, reader, patch).await;

        assert!(matches!(result, Err(ServiceError::PermissionDenied { .. })));
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;

        let patch = UpdateCalendar {
            name: Some("Household".to_string()),
            is_hidden: Some(true),
            ..Default::default()
        };
        let updated = service
            .update_calendar(calendar.id, owner, patch)
            .await
            .unwrap();

        assert_eq!(updated.name, "Household");
        assert!(updated.is_hidden);
        assert_eq!(updated.owner_id, owner);
    }

    #[tokio::test]
    async fn writer_cannot_share_or_delete() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let writer = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;
        service
            .share_calendar(calendar.id, owner, writer, Tier::Write)
            .await
            .unwrap();

        let share = service
            .share_calendar(calendar.id, writer, Uuid::new_v4(), Tier::Read)
            .await;
        assert!(matches!(share, Err(ServiceError::PermissionDenied { .. })));

        let unshare = service.remove_share(calendar.id, writer, owner).await;
        assert!(matches!(unshare, Err(ServiceError::PermissionDenied { .. })));

        let delete = service.delete_calendar(calendar.id, writer).await;
        assert!(matches!(delete, Err(ServiceError::PermissionDenied { .. })));
    }

    #[tokio::test]
    async fn admin_share_holder_can_manage_shares() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let admin = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;
        service
            .share_calendar(calendar.id, owner, admin, Tier::Admin)
            .await
            .unwrap();

        let updated = service
            .share_calendar(calendar.id, admin, Uuid::new_v4(), Tier::Read)
            .await
            .unwrap();

        assert_eq!(updated.shares.len(), 2);
    }

    #[tokio::test]
    async fn sharing_owner_is_invalid_operation() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;

        let result = service
            .share_calendar(calendar.id, owner, owner, Tier::Read)
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidOperation(_))));
    }

    #[tokio::test]
    async fn remove_absent_share_succeeds() {
        let (service, _, _) = services();
        let owner = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;

        let calendar = service
            .remove_share(calendar.id, owner, Uuid::new_v4())
            .await
            .unwrap();

        assert!(calendar.shares.is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_to_events() {
        let (service, event_service, repo) = services();
        let owner = Uuid::new_v4();
        let calendar = seed_calendar(&service, owner).await;

        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let event = Event::new(calendar.id, "Checkup", start, start + Duration::hours(1));
        event_service
            .create_event(calendar.id, owner, event)
            .await
            .unwrap();

        service.delete_calendar(calendar.id, owner).await.unwrap();

        use nestcal_core::storage::EventRepository as _;
        let leftovers = repo
            .list_events(calendar.id, &EventFilter::default())
            .await
            .unwrap();
        assert!(leftovers.is_empty());
    }
}
