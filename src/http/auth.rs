use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::http::AppError;
use crate::AppState;

/// The caller behind a valid `Authorization: Bearer` session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: uuid::Uuid,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
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
            .ok_or_else(AppError::unauthorized)?;

        let session = state.sessions.authenticate(token).map_err(|err| {
            tracing::warn!(error = ?err, "rejected malformed session token");
            AppError::unauthorized()
        })?;

        let session = session.ok_or_else(|| {
            tracing::debug!("rejected invalid session token");
            AppError::unauthorized()
        })?;

        Ok(AuthUser {
            user_id: session.user_id,
        })
    }
}
