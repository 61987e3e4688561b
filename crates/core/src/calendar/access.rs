//! Access-control resolution for shared calendars.
//!
//! Decision logic is pure: `resolve_tier` inspects an immutable calendar
//! snapshot and returns the principal's effective tier. The share mutations
//! below only edit the in-memory calendar; persisting the result is the
//! service layer's job.

use uuid::Uuid;

use super::error::ServiceError;
use super::types::{Calendar, CalendarShare, Tier};

/// Resolves the effective permission tier of `user_id` on `calendar`.
///
/// The owner always resolves to [`Tier::Admin`]; other users resolve to
/// their share's tier, or [`Tier::None`] when no share exists.
pub fn resolve_tier(calendar: &Calendar, user_id: Uuid) -> Tier {
    if calendar.owner_id == user_id {
        return Tier::Admin;
    }

    calendar
        .shares
        .iter()
        .find(|share| share.user_id == user_id)
        .map(|share| share.tier)
        .unwrap_or(Tier::None)
}

impl Calendar {
    /// Grants or updates a share for `user_id` at the given tier.
    ///
    /// Upserts by user: an existing share has its tier replaced, otherwise a
    /// new entry is appended. Rejects the owner (who already holds admin) and
    /// `Tier::None` (revocation goes through [`Calendar::remove_share`]).
    pub fn upsert_share(&mut self, user_id: Uuid, tier: Tier) -> Result<(), ServiceError> {
        if user_id == self.owner_id {
            return Err(ServiceError::InvalidOperation(
                "the calendar owner already holds admin access".to_string(),
            ));
        }
        if tier == Tier::None {
            return Err(ServiceError::InvalidOperation(
                "a share must grant read, write, or admin access".to_string(),
            ));
        }

        match self.shares.iter_mut().find(|share| share.user_id == user_id) {
            Some(share) => share.tier = tier,
            None => self.shares.push(CalendarShare { user_id, tier }),
        }

        Ok(())
    }

    /// Removes the share for `user_id`. No-op when no share exists.
    pub fn remove_share(&mut self, user_id: Uuid) {
        self.shares.retain(|share| share.user_id != user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar_with_owner() -> (Calendar, Uuid) {
        let owner = Uuid::new_v4();
        (Calendar::new(owner, "Family"), owner)
    }

    #[test]
    fn owner_resolves_to_admin() {
        let (calendar, owner) = calendar_with_owner();
        assert_eq!(resolve_tier(&calendar, owner), Tier::Admin);
    }

    #[test]
    fn unknown_user_resolves_to_none() {
        let (calendar, _) = calendar_with_owner();
        assert_eq!(resolve_tier(&calendar, Uuid::new_v4()), Tier::None);
    }

    #[test]
    fn shared_user_resolves_to_share_tier() {
        let (mut calendar, _) = calendar_with_owner();
        let reader = Uuid::new_v4();
        let writer = Uuid::new_v4();

        calendar.upsert_share(reader, Tier::Read).unwrap();
        calendar.upsert_share(writer, Tier::Write).unwrap();

        assert_eq!(resolve_tier(&calendar, reader), Tier::Read);
        assert_eq!(resolve_tier(&calendar, writer), Tier::Write);
    }

    #[test]
    fn upsert_share_replaces_existing_tier() {
        let (mut calendar, _) = calendar_with_owner();
        let user = Uuid::new_v4();

        calendar.upsert_share(user, Tier::Read).unwrap();
        calendar.upsert_share(user, Tier::Admin).unwrap();

        assert_eq!(calendar.shares.len(), 1);
        assert_eq!(resolve_tier(&calendar, user), Tier::Admin);
    }

    #[test]
    fn upsert_share_is_idempotent_under_tier() {
        let (mut calendar, _) = calendar_with_owner();
        let user = Uuid::new_v4();

        calendar.upsert_share(user, Tier::Write).unwrap();
        let snapshot = calendar.shares.clone();
        calendar.upsert_share(user, Tier::Write).unwrap();

        assert_eq!(calendar.shares, snapshot);
    }

    #[test]
    fn upsert_share_rejects_owner() {
        let (mut calendar, owner) = calendar_with_owner();

        let result = calendar.upsert_share(owner, Tier::Read);

        assert!(matches!(result, Err(ServiceError::InvalidOperation(_))));
        assert!(calendar.shares.is_empty());
    }

    #[test]
    fn upsert_share_rejects_none_tier() {
        let (mut calendar, _) = calendar_with_owner();

        let result = calendar.upsert_share(Uuid::new_v4(), Tier::None);

        assert!(matches!(result, Err(ServiceError::InvalidOperation(_))));
    }

    #[test]
    fn remove_share_deletes_entry() {
        let (mut calendar, _) = calendar_with_owner();
        let user = Uuid::new_v4();

        calendar.upsert_share(user, Tier::Read).unwrap();
        calendar.remove_share(user);

        assert_eq!(resolve_tier(&calendar, user), Tier::None);
    }

    #[test]
    fn remove_share_is_noop_when_absent() {
        let (mut calendar, _) = calendar_with_owner();
        let user = Uuid::new_v4();

        calendar.upsert_share(user, Tier::Read).unwrap();
        calendar.remove_share(Uuid::new_v4());

        assert_eq!(calendar.shares.len(), 1);
    }
}
