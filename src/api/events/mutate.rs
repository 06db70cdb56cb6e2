use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::api::{response, AppState};
use crate::engine::{Gate, Identity};
use crate::error::AppError;
use crate::models::UpdateEvent;

pub async fn update_event(
    State(state): State<AppState>,
    identity: Identity,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEvent>,
) -> Result<impl IntoResponse, AppError> {
    let Some(mut event) = state.events.find_by_id(event_id).await? else {
        return Err(AppError::NotFound("Event not found".to_string()));
    };

    // The gate runs before any field is touched. Foreign events answer like
    // missing ones.
    if !Gate::can_edit(Some(&identity), &event) {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    event.apply(payload);

    let errors = event.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if state
        .events
        .name_exists(identity.user_id, &event.name, Some(event.id))
        .await?
    {
        return Err(AppError::validation(
            "name",
            "An event with this name already exists",
        ));
    }

    state.events.update(&event).await?;
    info!("Updated event {} ({})", event.id, event.name);

    Ok(response::success(event, "Event updated successfully"))
}

pub async fn delete_event(
    State(state): State<AppState>,
    identity: Identity,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let Some(event) = state.events.find_by_id(event_id).await? else {
        return Err(AppError::NotFound("Event not found".to_string()));
    };

    if !Gate::can_delete(Some(&identity), &event) {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    if !state.events.delete(event_id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    info!("Deleted event {} ({})", event_id, event.name);

    Ok(response::empty_success("Event deleted successfully"))
}
