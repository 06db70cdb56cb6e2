pub mod auth;
pub mod events;
pub mod extract;
pub mod health;
pub mod response;
pub mod ui;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::SessionTokens;
use crate::store::{EventStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
    pub users: Arc<dyn UserStore>,
    pub tokens: SessionTokens,
}

pub fn build_router(
    events: Arc<dyn EventStore>,
    users: Arc<dyn UserStore>,
    tokens: SessionTokens,
) -> Router {
    let state = AppState {
        events,
        users,
        tokens,
    };

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/events", get(events::list_events))
        .route("/api/events", post(events::create_event))
        .route("/api/events/{id}", get(events::get_event))
        .route("/api/events/{id}", put(events::update_event))
        .route("/api/events/{id}", delete(events::delete_event))
        .route("/api/stats", get(events::get_stats))
        .with_state(state)
}
