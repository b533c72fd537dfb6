use std::sync::Arc;

use crate::config::ServerConfig;
use crate::render::ListRenderer;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is the single shared storage handle: constructed
/// once at startup, never global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// List-view renderer. Held as a trait object so tests or an actual
    /// templating engine can substitute their own implementation.
    pub renderer: Arc<dyn ListRenderer>,
}
