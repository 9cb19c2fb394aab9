use axum::Router;

use crate::AppState;

mod auth;
mod error;
mod handlers;
mod routes;

pub use auth::AuthUser;
pub use error::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .nest(
            "/api",
            Router::new()
                .merge(routes::config())
                .merge(routes::cities())
                .merge(routes::notifications()),
        )
        .with_state(state)
}
