use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde_json::json;
use uuid::Uuid;

use crate::api::{response, AppState};
use crate::engine::{Gate, Identity, Pipeline};
use crate::error::AppError;
use crate::models::{EventStats, ListEventsQuery};

/// The list is always scoped to the requester: the store query itself is
/// owner-filtered, then the pipeline applies search/tag/sort.
pub async fn list_events(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ListEventsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let owned = state.events.list_by_owner(identity.user_id).await?;
    let events = Pipeline::run(&owned, &query);
    let total = events.len();

    Ok(response::success(
        json!({ "events": events, "total": total }),
        "Events fetched successfully",
    ))
}

/// A foreign owner's event answers exactly like a missing one, so ids cannot
/// be probed for existence.
pub async fn get_event(
    State(state): State<AppState>,
    identity: Identity,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .events
        .find_by_id(event_id)
        .await?
        .filter(|event| Gate::can_read(Some(&identity), event))
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(response::success(event, "Event fetched successfully"))
}

pub async fn get_stats(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let owned = state.events.list_by_owner(identity.user_id).await?;
    let stats = EventStats::from_events(&owned);

    Ok(response::success(stats, "Stats fetched successfully"))
}
