use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

use crate::api::{response, AppState};
use crate::engine::Identity;
use crate::error::AppError;
use crate::models::{CreateEvent, Event};

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateEvent>,
) -> Result<impl IntoResponse, AppError> {
    let event = Event::new(payload, identity.user_id);

    let errors = event.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if state
        .events
        .name_exists(identity.user_id, &event.name, None)
        .await?
    {
        return Err(AppError::validation(
            "name",
            "An event with this name already exists",
        ));
    }

    state.events.create(&event).await?;
    info!(
        "Created event {} ({}) for user {}",
        event.id, event.name, identity.username
    );

    Ok(response::created(event, "Event created successfully"))
}
