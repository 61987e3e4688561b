use serde::Deserialize;
use uuid::Uuid;

use nestcal_core::calendar::{Calendar, Tier, DEFAULT_COLOR};

/// Request payload for creating a new calendar.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendar {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub is_default: bool,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl CreateCalendar {
    /// Converts the create request into a Calendar owned by `owner_id`.
    pub fn into_calendar(self, owner_id: Uuid) -> Calendar {
        let mut calendar = Calendar::new(owner_id, self.name).with_color(self.color);
        if let Some(description) = self.description {
            calendar = calendar.with_description(description);
        }
        if self.is_default {
            calendar = calendar.as_default();
        }
        calendar
    }
}

/// Request payload for patching a calendar. The owner and the sharing list
/// are not patchable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendar {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub is_hidden: Option<bool>,
}

impl UpdateCalendar {
    /// Applies the patch to an existing calendar.
    pub fn apply_to(self, calendar: &mut Calendar) {
        if let Some(name) = self.name {
            calendar.name = name;
        }
        if let Some(description) = self.description {
            calendar.description = Some(description);
        }
        if let Some(color) = self.color {
            calendar.color = color;
        }
        if let Some(is_default) = self.is_default {
            calendar.is_default = is_default;
        }
        if let Some(is_hidden) = self.is_hidden {
            calendar.is_hidden = is_hidden;
        }
    }
}

/// Request payload for granting or updating a calendar share.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub user_id: Uuid,
    pub tier: Tier,
}
