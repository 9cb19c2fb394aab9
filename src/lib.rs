pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;
pub mod ui;

use std::sync::Arc;

use crate::app::auth::SessionService;
use crate::config::{AppConfig, RuntimeConfig};
use crate::infra::db::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub sessions: SessionService,
    pub runtime: Arc<RuntimeConfig>,
}

impl AppState {
    pub fn new(config: &AppConfig, db: Db) -> Self {
        Self {
            db,
            sessions: SessionService::new(config.session_key, config.session_ttl_minutes),
            runtime: Arc::new(config.runtime.clone()),
        }
    }
}
