use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::models::event::parse_event_date;
use crate::models::{Event, ListEventsQuery, SortBy, SortOrder};

pub struct Pipeline;

impl Pipeline {
    /// Filter and sort one user's events. Pure: never mutates the input, and
    /// identical inputs produce identical output.
    pub fn run(events: &[Event], query: &ListEventsQuery) -> Vec<Event> {
        let mut result: Vec<Event> = events
            .iter()
            .filter(|event| Self::matches_search(event, query.search.as_deref()))
            .filter(|event| Self::matches_tag(event, query.tag.as_deref()))
            .cloned()
            .collect();

        Self::sort(&mut result, query.sort_by, query.sort_order);
        result
    }

    /// Case-insensitive substring match on name, location, or description.
    /// An empty or absent search matches everything.
    fn matches_search(event: &Event, search: Option<&str>) -> bool {
        let Some(needle) = search else {
            return true;
        };
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        event.name.to_lowercase().contains(&needle)
            || event.location.to_lowercase().contains(&needle)
            || event
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&needle)
    }

    /// Exact, case-sensitive equality with one stored tag. An empty or
    /// absent tag matches everything.
    fn matches_tag(event: &Event, tag: Option<&str>) -> bool {
        let Some(tag) = tag else {
            return true;
        };
        if tag.is_empty() {
            return true;
        }
        event.tags.iter().any(|candidate| candidate == tag)
    }

    fn sort(events: &mut [Event], sort_by: SortBy, sort_order: SortOrder) {
        // Descending reverses the comparator, not the output, so equal keys
        // keep their input order in both directions.
        events.sort_by(|a, b| {
            let ordering = Self::compare(a, b, sort_by);
            match sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    fn compare(a: &Event, b: &Event, sort_by: SortBy) -> Ordering {
        match sort_by {
            SortBy::Name => compare_case_insensitive(&a.name, &b.name),
            SortBy::Location => compare_case_insensitive(&a.location, &b.location),
            SortBy::Date => date_sort_key(a).cmp(&date_sort_key(b)),
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            SortBy::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Sort key for the stored date string. Writes reject malformed dates, so an
/// unparsable value can only come from legacy data; it sorts as maximal
/// ("latest") and the record stays in the result.
fn date_sort_key(event: &Event) -> DateTime<Utc> {
    match parse_event_date(&event.date) {
        Some(parsed) => parsed,
        None => {
            warn!(
                "Unparsable date '{}' on event {}, sorting it last",
                event.date, event.id
            );
            DateTime::<Utc>::MAX_UTC
        }
    }
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
