//! Recurrence expansion: turns an event's [`RecurrenceRule`] into a bounded,
//! deterministic sequence of concrete [`Occurrence`]s.
//!
//! Expansion is a pure computation over the event snapshot. The iterator is
//! lazy, finite, and restartable: expanding the same event twice yields the
//! same sequence, and no cursor state survives between calls.
//!
//! Each occurrence start is computed from the base event's start plus a whole
//! number of steps, so a monthly rule preserves the day of month wherever it
//! exists. When the target month is shorter, the date clamps to the month's
//! last day (Jan 31 plus one month is Feb 29 in 2024, Feb 28 otherwise);
//! yearly steps are twelve-month steps and clamp the same way.

use chrono::{DateTime, Duration, Months, Utc};

use super::types::{Event, Frequency, Occurrence};

/// Lazy iterator over the occurrences of an event.
///
/// Two independent guards bound the sequence, whichever triggers first:
/// the emitted count reaching `max_count`, and — for recurring rules with an
/// `until` instant — a candidate start past `until` (the straddling
/// occurrence is excluded, never truncated). A non-recurring event yields
/// exactly its own single occurrence and ignores both guards.
pub struct Occurrences<'a> {
    event: &'a Event,
    index: u32,
    remaining: usize,
    done: bool,
}

impl<'a> Occurrences<'a> {
    /// Starts expansion of `event`, emitting at most `max_count` occurrences
    /// (treated as at least 1).
    pub fn new(event: &'a Event, max_count: usize) -> Self {
        Self {
            event,
            index: 0,
            remaining: max_count.max(1),
            done: false,
        }
    }

    /// Start instant of the `index`-th occurrence, counted from the base
    /// event. Returns `None` past the end of the calendar range.
    fn nth_start(&self, index: u32) -> Option<DateTime<Utc>> {
        let rule = &self.event.recurrence;
        let base = self.event.start_date;
        let steps = index.checked_mul(rule.interval)?;

        match rule.frequency {
            Frequency::None => (index == 0).then_some(base),
            Frequency::Daily => base.checked_add_signed(Duration::days(i64::from(steps))),
            Frequency::Weekly => base.checked_add_signed(Duration::days(7 * i64::from(steps))),
            Frequency::Monthly => base.checked_add_months(Months::new(steps)),
            Frequency::Yearly => steps
                .checked_mul(12)
                .and_then(|months| base.checked_add_months(Months::new(months))),
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        if self.done || self.remaining == 0 {
            return None;
        }

        let Some(start) = self.nth_start(self.index) else {
            self.done = true;
            return None;
        };

        let rule = &self.event.recurrence;

        // The base event is never subject to the until bound.
        if !rule.is_recurring() {
            self.done = true;
            return Some(Occurrence::of(self.event, start));
        }

        if rule.until.is_some_and(|until| start > until) {
            self.done = true;
            return None;
        }

        self.index = match self.index.checked_add(1) {
            Some(next) => next,
            None => {
                self.done = true;
                self.index
            }
        };
        self.remaining -= 1;

        Some(Occurrence::of(self.event, start))
    }
}

/// Eagerly expands `event` into at most `max_count` occurrences.
pub fn generate(event: &Event, max_count: usize) -> Vec<Occurrence> {
    Occurrences::new(event, max_count).collect()
}
