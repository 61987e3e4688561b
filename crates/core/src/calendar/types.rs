use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default accent color for calendars and events (CSS hex value).
pub const DEFAULT_COLOR: &str = "#0ea5e9";

/// Permission level a principal holds on a calendar.
///
/// Ordered so that comparisons express privilege: `None < Read < Write <
/// Admin`. The calendar owner always resolves to `Admin`; stored shares never
/// hold `None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    None,
    Read,
    Write,
    Admin,
}

impl Tier {
    /// Returns true if the tier grants any access at all.
    pub fn has_access(self) -> bool {
        self != Tier::None
    }

    /// Returns true if the tier allows mutating events on the calendar.
    pub fn can_write(self) -> bool {
        self >= Tier::Write
    }

    /// Returns true if the tier allows managing the calendar itself
    /// (sharing, unsharing, deletion).
    pub fn is_admin(self) -> bool {
        self == Tier::Admin
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::None => write!(f, "none"),
            Tier::Read => write!(f, "read"),
            Tier::Write => write!(f, "write"),
            Tier::Admin => write!(f, "admin"),
        }
    }
}

/// A single sharing grant on a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarShare {
    pub user_id: Uuid,
    pub tier: Tier,
}

/// A named calendar owned by one user and optionally shared with others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: Uuid,
    /// Exclusive creator reference; never appears in `shares`.
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Default color for events in this calendar (CSS color value).
    pub color: String,
    pub is_default: bool,
    pub is_hidden: bool,
    /// At most one entry per user, enforced by the share mutations.
    #[serde(default)]
    pub shares: Vec<CalendarShare>,
}

impl Calendar {
    /// Creates a new calendar owned by the given user.
    pub fn new(owner_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            description: None,
            color: DEFAULT_COLOR.to_string(),
            is_default: false,
            is_hidden: false,
            shares: Vec::new(),
        }
    }

    /// Sets the description for this calendar.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the color for this calendar.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Marks this calendar as the owner's default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Sets a specific ID for this calendar (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// Category of an event, used by the equality filter on listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Appointment,
    Activity,
    Reminder,
    Milestone,
    #[default]
    Other,
}

/// How the user wants to be reminded of an event. Stored with the event;
/// delivery is handled elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    #[default]
    Notification,
    Email,
    Both,
    None,
}

/// Reminder preference attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub minutes: u32,
}

impl Default for Reminder {
    fn default() -> Self {
        Self {
            kind: ReminderKind::Notification,
            minutes: 30,
        }
    }
}

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Describes how an event repeats: frequency, step, and an optional bound.
///
/// `frequency = none` means the event occurs exactly once, regardless of the
/// other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(default)]
    pub frequency: Frequency,
    /// Step between occurrences, in units of `frequency`. Must be >= 1.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Inclusive upper bound on occurrence start instants.
    #[serde(default)]
    pub until: Option<DateTime<Utc>>,
}

fn default_interval() -> u32 {
    1
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            frequency: Frequency::None,
            interval: 1,
            until: None,
        }
    }
}

impl RecurrenceRule {
    /// Creates a rule with the given frequency and a step of 1.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }

    /// Sets the step between occurrences.
    pub fn every(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Bounds generation at the given instant (inclusive).
    pub fn until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Returns true if the rule describes a repeating event.
    pub fn is_recurring(&self) -> bool {
        self.frequency != Frequency::None
    }
}

/// A calendar event. Belongs to exactly one calendar at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    /// Owning calendar; immutable after creation.
    pub calendar_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
    pub color: String,
    pub all_day: bool,
    pub start_date: DateTime<Utc>,
    /// Always >= `start_date`.
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub recurrence: RecurrenceRule,
    #[serde(default)]
    pub reminder: Reminder,
    /// Weak reference to an external child record.
    pub child_id: Option<Uuid>,
}

impl Event {
    /// Creates a new event in the given calendar.
    pub fn new(
        calendar_id: Uuid,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            calendar_id,
            title: title.into(),
            description: None,
            location: None,
            category: EventCategory::default(),
            color: DEFAULT_COLOR.to_string(),
            all_day: false,
            start_date,
            end_date,
            recurrence: RecurrenceRule::default(),
            reminder: Reminder::default(),
            child_id: None,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the category for this event.
    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the accent color for this event.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Attaches a recurrence rule to this event.
    pub fn with_recurrence(mut self, recurrence: RecurrenceRule) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Links this event to an external child record.
    pub fn with_child(mut self, child_id: Uuid) -> Self {
        self.child_id = Some(child_id);
        self
    }

    /// Marks this event as spanning whole days.
    pub fn as_all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// The event's duration, preserved by every generated occurrence.
    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }
}

/// One concrete instance of a (possibly recurring) event.
///
/// Derived on demand by recurrence expansion; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub event_id: Uuid,
    pub calendar_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: EventCategory,
    pub color: String,
    pub all_day: bool,
    pub child_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Occurrence {
    /// Builds the occurrence of `event` starting at `start_date`, preserving
    /// the event's duration.
    pub fn of(event: &Event, start_date: DateTime<Utc>) -> Self {
        Self {
            event_id: event.id,
            calendar_id: event.calendar_id,
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            category: event.category,
            color: event.color.clone(),
            all_day: event.all_day,
            child_id: event.child_id,
            start_date,
            end_date: start_date + event.duration(),
        }
    }
}
