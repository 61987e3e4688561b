use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use nestcal_core::calendar::{
    Event, EventCategory, EventError, RecurrenceRule, Reminder, DEFAULT_COLOR,
};
use nestcal_core::storage::{DateRange, DateRangeError, EventFilter};

/// Request payload for creating a new event. The target calendar comes from
/// the URL; a calendar id in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub all_day: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub recurrence: RecurrenceRule,
    #[serde(default)]
    pub reminder: Reminder,
    #[serde(default)]
    pub child_id: Option<Uuid>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl CreateEvent {
    /// Converts the create request into an Event under `calendar_id`.
    pub fn into_event(self, calendar_id: Uuid) -> Event {
        let mut event = Event::new(calendar_id, self.title, self.start_date, self.end_date)
            .with_category(self.category)
            .with_color(self.color)
            .with_recurrence(self.recurrence);
        if let Some(description) = self.description {
            event = event.with_description(description);
        }
        if let Some(location) = self.location {
            event = event.with_location(location);
        }
        if let Some(child_id) = self.child_id {
            event = event.with_child(child_id);
        }
        if self.all_day {
            event = event.as_all_day();
        }
        event.reminder = self.reminder;
        event
    }
}

/// Request payload for patching an event.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    /// Present only to be rejected: events cannot move between calendars.
    #[serde(default)]
    pub calendar_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<EventCategory>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub all_day: Option<bool>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
    #[serde(default)]
    pub reminder: Option<Reminder>,
    #[serde(default)]
    pub child_id: Option<Uuid>,
}

impl UpdateEvent {
    /// Applies the patch to an existing event. Fails when the patch names a
    /// different owning calendar.
    pub fn apply_to(self, event: &mut Event) -> Result<(), EventError> {
        if let Some(calendar_id) = self.calendar_id {
            if calendar_id != event.calendar_id {
                return Err(EventError::CalendarImmutable);
            }
        }
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(location) = self.location {
            event.location = Some(location);
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
        if let Some(start_date) = self.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            event.end_date = end_date;
        }
        if let Some(recurrence) = self.recurrence {
            event.recurrence = recurrence;
        }
        if let Some(reminder) = self.reminder {
            event.reminder = reminder;
        }
        if let Some(child_id) = self.child_id {
            event.child_id = Some(child_id);
        }
        Ok(())
    }
}

/// Query parameters for listing a calendar's events.
///
/// The date window filters by boundary-inclusive overlap and applies only
/// when both bounds are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub child_id: Option<Uuid>,
    #[serde(default)]
    pub category: Option<EventCategory>,
}

impl ListEventsQuery {
    /// Converts the query into a repository filter, validating the window.
    pub fn into_filter(self) -> Result<EventFilter, DateRangeError> {
        let range = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
            _ => None,
        };
        Ok(EventFilter {
            range,
            child_id: self.child_id,
            category: self.category,
        })
    }
}

/// Query parameters for the occurrence expansion endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OccurrencesQuery {
    #[serde(default)]
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nestcal_core::calendar::Frequency;

    fn instant(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn create_request_converts_to_event() {
        let json = r#"{
            "title": "Swimming lesson",
            "location": "Pool",
            "category": "activity",
            "allDay": false,
            "startDate": "2024-06-01T09:00:00Z",
            "endDate": "2024-06-01T10:00:00Z",
            "recurrence": { "frequency": "weekly" }
        }"#;
        let request: CreateEvent = serde_json::from_str(json).unwrap();
        let calendar_id = Uuid::new_v4();

        let event = request.into_event(calendar_id);

        assert_eq!(event.calendar_id, calendar_id);
        assert_eq!(event.title, "Swimming lesson");
        assert_eq!(event.category, EventCategory::Activity);
        assert_eq!(event.recurrence.frequency, Frequency::Weekly);
        assert_eq!(event.recurrence.interval, 1);
        assert_eq!(event.color, DEFAULT_COLOR);
    }

    #[test]
    fn update_patch_rejects_foreign_calendar() {
        let mut event = Event::new(
            Uuid::new_v4(),
            "Checkup",
            instant(2024, 6, 1),
            instant(2024, 6, 2),
        );
        let patch = UpdateEvent {
            calendar_id: Some(Uuid::new_v4()),
            ..Default::default()
        };

        assert_eq!(patch.apply_to(&mut event), Err(EventError::CalendarImmutable));
    }

    #[test]
    fn update_patch_accepts_same_calendar() {
        let mut event = Event::new(
            Uuid::new_v4(),
            "Checkup",
            instant(2024, 6, 1),
            instant(2024, 6, 2),
        );
        let patch = UpdateEvent {
            calendar_id: Some(event.calendar_id),
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut event).unwrap();

        assert_eq!(event.title, "Renamed");
    }

    #[test]
    fn list_query_builds_range_only_with_both_bounds() {
        let query = ListEventsQuery {
            from: Some(instant(2024, 6, 1)),
            ..Default::default()
        };
        assert!(query.into_filter().unwrap().range.is_none());

        let query = ListEventsQuery {
            from: Some(instant(2024, 6, 1)),
            to: Some(instant(2024, 6, 30)),
            ..Default::default()
        };
        assert!(query.into_filter().unwrap().range.is_some());
    }

    #[test]
    fn list_query_rejects_inverted_window() {
        let query = ListEventsQuery {
            from: Some(instant(2024, 6, 30)),
            to: Some(instant(2024, 6, 1)),
            ..Default::default()
        };

        assert_eq!(query.into_filter(), Err(DateRangeError::InvalidRange));
    }
}
