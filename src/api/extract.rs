use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::api::AppState;
use crate::engine::Identity;
use crate::error::AppError;

/// Pulls the Bearer token out of the Authorization header and verifies it.
/// Handlers that take an `Identity` argument are authenticated routes; a
/// missing or bad token rejects with 401 before the handler body runs.
impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        state.tokens.verify(token)
    }
}
