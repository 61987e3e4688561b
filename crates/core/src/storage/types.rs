use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::calendar::{overlaps_range, Event, EventCategory};

use super::DateRangeError;

/// An instant range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new range, validating that `start <= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }
}

/// Conjunction of optional predicates applied when listing events.
///
/// The range test is the boundary-inclusive overlap from
/// [`overlaps_range`]; `child_id` and `category` are equality filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub range: Option<DateRange>,
    pub child_id: Option<Uuid>,
    pub category: Option<EventCategory>,
}

impl EventFilter {
    /// Returns true if `event` satisfies every present predicate.
    pub fn matches(&self, event: &Event) -> bool {
        let in_range = match self.range {
            Some(range) => overlaps_range(event, Some(range.start), Some(range.end)),
            None => true,
        };

        in_range
            && self.child_id.is_none_or(|id| event.child_id == Some(id))
            && self.category.is_none_or(|c| event.category == c)
    }
}
