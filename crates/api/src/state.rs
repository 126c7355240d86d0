use std::sync::Arc;

use moguri_db::DbPool;

use crate::config::ServerConfig;

/// What every handler can reach through `State<AppState>`.
///
/// The pool and the read-only configuration are the only shared state;
/// cloning copies two handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
