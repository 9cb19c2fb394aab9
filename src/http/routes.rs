use axum::{routing::get, routing::post, Router};

use crate::http::handlers;
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn config() -> Router<AppState> {
    Router::new().route("/config", get(handlers::runtime_config))
}

pub fn cities() -> Router<AppState> {
    Router::new().route("/cities", get(handlers::list_cities))
}

pub fn notifications() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::list_notifications))
        .route(
            "/notifications/unread-count",
            get(handlers::unread_notification_count),
        )
        .route(
            "/notifications/mark-all-read",
            post(handlers::mark_all_notifications_read),
        )
        .route(
            "/notifications/:id/read",
            post(handlers::mark_notification_read),
        )
}
