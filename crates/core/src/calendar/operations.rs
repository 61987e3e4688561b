use chrono::{DateTime, Utc};

use super::error::{CalendarError, EventError};
use super::types::{Calendar, Event};

/// Validates a calendar before creation or update.
pub fn validate_calendar(calendar: &Calendar) -> Result<(), CalendarError> {
    if calendar.name.trim().is_empty() {
        return Err(CalendarError::EmptyName);
    }
    if calendar.name.len() > 100 {
        return Err(CalendarError::NameTooLong);
    }
    if !is_valid_color(&calendar.color) {
        return Err(CalendarError::InvalidColor(calendar.color.clone()));
    }
    Ok(())
}

/// Validates an event before creation or update.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title.len() > 200 {
        return Err(EventError::TitleTooLong);
    }
    if event.end_date < event.start_date {
        return Err(EventError::InvalidDateRange);
    }
    if event.recurrence.interval == 0 {
        return Err(EventError::ZeroInterval);
    }
    if !is_valid_color(&event.color) {
        return Err(EventError::InvalidColor(event.color.clone()));
    }
    Ok(())
}

/// Boundary-inclusive overlap test against an optional `[from, to]` window.
/// An event matches when it starts before or on `to` AND ends on or after
/// `from`; an absent bound matches everything on that side.
pub fn overlaps_range(event: &Event, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    from.is_none_or(|f| event.end_date >= f) && to.is_none_or(|t| event.start_date <= t)
}

/// Sorts events by start instant, ascending. Ties keep their relative order.
pub fn sort_events_by_start(events: &mut [Event]) {
    events.sort_by_key(|event| event.start_date);
}

/// Checks if a color string is valid (hex color or CSS named color).
fn is_valid_color(color: &str) -> bool {
    if color.is_empty() {
        return false;
    }

    // Check hex color format (#RGB, #RRGGBB, #RRGGBBAA)
    if let Some(hex) = color.strip_prefix('#') {
        let valid_lengths = [3, 6, 8];
        return valid_lengths.contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    // Allow common CSS color names
    let css_colors = [
        "red", "green", "blue", "yellow", "orange", "purple", "pink", "cyan", "magenta", "white",
        "black", "gray", "grey", "brown", "navy", "teal", "olive", "maroon", "lime", "aqua",
        "fuchsia", "silver",
    ];
    css_colors.contains(&color.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Frequency, RecurrenceRule};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn instant(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn event(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::new(Uuid::new_v4(), "Checkup", start, end)
    }

    #[test]
    fn validate_calendar_success() {
        let calendar = Calendar::new(Uuid::new_v4(), "Family");
        assert!(validate_calendar(&calendar).is_ok());
    }

    #[test]
    fn validate_calendar_empty_name() {
        let calendar = Calendar::new(Uuid::new_v4(), "   ");
        assert_eq!(validate_calendar(&calendar), Err(CalendarError::EmptyName));
    }

    #[test]
    fn validate_calendar_name_too_long() {
        let calendar = Calendar::new(Uuid::new_v4(), "x".repeat(101));
        assert_eq!(
            validate_calendar(&calendar),
            Err(CalendarError::NameTooLong)
        );
    }

    #[test]
    fn validate_calendar_invalid_color() {
        let calendar = Calendar::new(Uuid::new_v4(), "Family").with_color("not-a-color");
        assert!(matches!(
            validate_calendar(&calendar),
            Err(CalendarError::InvalidColor(_))
        ));
    }

    #[test]
    fn validate_event_success() {
        let e = event(instant(2024, 3, 10), instant(2024, 3, 12));
        assert!(validate_event(&e).is_ok());
    }

    #[test]
    fn validate_event_empty_title() {
        let mut e = event(instant(2024, 3, 10), instant(2024, 3, 12));
        e.title = String::new();
        assert_eq!(validate_event(&e), Err(EventError::EmptyTitle));
    }

    #[test]
    fn validate_event_inverted_dates() {
        let e = event(instant(2024, 3, 12), instant(2024, 3, 10));
        assert_eq!(validate_event(&e), Err(EventError::InvalidDateRange));
    }

    #[test]
    fn validate_event_equal_dates_are_valid() {
        let e = event(instant(2024, 3, 10), instant(2024, 3, 10));
        assert!(validate_event(&e).is_ok());
    }

    #[test]
    fn validate_event_zero_interval() {
        let mut e = event(instant(2024, 3, 10), instant(2024, 3, 12));
        e.recurrence = RecurrenceRule::new(Frequency::Daily).every(0);
        assert_eq!(validate_event(&e), Err(EventError::ZeroInterval));
    }

    #[test]
    fn overlap_is_boundary_inclusive() {
        let e = event(instant(2024, 3, 10), instant(2024, 3, 12));

        assert!(overlaps_range(
            &e,
            Some(instant(2024, 3, 12)),
            Some(instant(2024, 3, 20))
        ));
        assert!(!overlaps_range(
            &e,
            Some(instant(2024, 3, 13)),
            Some(instant(2024, 3, 20))
        ));
    }

    #[test]
    fn overlap_with_open_bounds() {
        let e = event(instant(2024, 3, 10), instant(2024, 3, 12));

        assert!(overlaps_range(&e, None, None));
        assert!(overlaps_range(&e, Some(instant(2024, 3, 1)), None));
        assert!(!overlaps_range(&e, Some(instant(2024, 4, 1)), None));
        assert!(overlaps_range(&e, None, Some(instant(2024, 3, 10))));
        assert!(!overlaps_range(&e, None, Some(instant(2024, 3, 9))));
    }

    #[test]
    fn sort_orders_by_start_ascending() {
        let mut events = vec![
            event(instant(2024, 3, 20), instant(2024, 3, 21)),
            event(instant(2024, 3, 10), instant(2024, 3, 11)),
            event(instant(2024, 3, 15), instant(2024, 3, 16)),
        ];

        sort_events_by_start(&mut events);

        let starts: Vec<_> = events.iter().map(|e| e.start_date).collect();
        assert_eq!(
            starts,
            vec![instant(2024, 3, 10), instant(2024, 3, 15), instant(2024, 3, 20)]
        );
    }

    #[test]
    fn color_validation() {
        let named = Calendar::new(Uuid::new_v4(), "A").with_color("teal");
        assert!(validate_calendar(&named).is_ok());

        let hex = Calendar::new(Uuid::new_v4(), "B").with_color("#FFF");
        assert!(validate_calendar(&hex).is_ok());

        let bad_hex = Calendar::new(Uuid::new_v4(), "C").with_color("#12345");
        assert!(validate_calendar(&bad_hex).is_err());
    }
}
