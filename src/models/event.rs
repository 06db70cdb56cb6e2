use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::FieldError;

pub const NAME_MAX_LEN: usize = 100;
pub const LOCATION_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,

    // Canonical ownership field. Older data files carried `user_id` or
    // `created_by`; those are accepted on load and normalized here, so the
    // authorization gate only ever sees `owner_id`.
    #[serde(alias = "user_id", alias = "created_by")]
    pub owner_id: Uuid,

    pub name: String,

    // Kept as the stored string; validated as ISO-8601-parseable at write
    // time. See `parse_event_date` for what the sort accepts.
    pub date: String,

    pub location: String,

    pub description: Option<String>,

    #[serde(default)]
    #[sqlx(json)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_tags")]
    pub tags: Option<Vec<String>>,
}

/// Tags arrive either as a JSON array or as one comma-separated string.
/// Items are trimmed and empty items dropped.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_tags(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagsInput {
        List(Vec<String>),
        Csv(String),
    }

    let input = Option::<TagsInput>::deserialize(deserializer)?;
    Ok(input.map(|tags| match tags {
        TagsInput::List(list) => normalize_tags(list),
        TagsInput::Csv(raw) => normalize_tags(raw.split(',').map(str::to_string).collect()),
    }))
}

fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    raw.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortBy {
    Name,
    #[default]
    Date,
    Location,
    CreatedAt,
    UpdatedAt,
}

impl From<String> for SortBy {
    fn from(raw: String) -> Self {
        // Unknown values fall back to the default instead of rejecting the
        // request.
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => SortBy::Name,
            "location" => SortBy::Location,
            "created_at" => SortBy::CreatedAt,
            "updated_at" => SortBy::UpdatedAt,
            _ => SortBy::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<String> for SortOrder {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventStats {
    pub total_events: usize,
    pub unique_tags: usize,
    pub all_tags: Vec<String>,
}

impl Event {
    pub fn new(create: CreateEvent, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: create.name,
            date: create.date,
            location: create.location,
            description: create.description,
            tags: create.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields that the update provides. `id`, `owner_id`
    /// and `created_at` never change; `updated_at` is refreshed.
    pub fn apply(&mut self, update: UpdateEvent) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(tags) = update.tags {
            self.tags = normalize_tags(tags);
        }
        self.updated_at = Utc::now();
    }

    /// Field-level checks, run before any store interaction. Malformed dates
    /// are rejected here so the read path only meets them in legacy data.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Event name is required"));
        } else if self.name.chars().count() > NAME_MAX_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Event name must be less than {} characters", NAME_MAX_LEN),
            ));
        }

        if self.date.trim().is_empty() {
            errors.push(FieldError::new("date", "Event date is required"));
        } else if parse_event_date(&self.date).is_none() {
            errors.push(FieldError::new("date", "Invalid date format"));
        }

        if self.location.trim().is_empty() {
            errors.push(FieldError::new("location", "Event location is required"));
        } else if self.location.chars().count() > LOCATION_MAX_LEN {
            errors.push(FieldError::new(
                "location",
                format!("Location must be less than {} characters", LOCATION_MAX_LEN),
            ));
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                errors.push(FieldError::new(
                    "description",
                    format!(
                        "Description must be less than {} characters",
                        DESCRIPTION_MAX_LEN
                    ),
                ));
            }
        }

        errors
    }
}

impl EventStats {
    pub fn from_events(events: &[Event]) -> Self {
        let all_tags: BTreeSet<String> = events
            .iter()
            .flat_map(|event| event.tags.iter().cloned())
            .collect();

        Self {
            total_events: events.len(),
            unique_tags: all_tags.len(),
            all_tags: all_tags.into_iter().collect(),
        }
    }
}

/// Parse the stored date string. Accepts RFC 3339 (with `Z` or an offset),
/// `YYYY-MM-DDTHH:MM[:SS[.frac]]` without a zone (read as UTC), and a bare
/// `YYYY-MM-DD` (read as UTC midnight).
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
