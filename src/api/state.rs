//! Shared API server state

use std::sync::Arc;

use crate::db::Database;

/// State shared by every request handler.
#[derive(Clone, Default)]
pub struct AppState {
    /// Database handle, absent until the persistence layer is wired up.
    pub db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(db: Option<Arc<Database>>) -> Self {
        Self { db }
    }

    /// Create state for a process running without a database.
    pub fn without_database() -> Self {
        Self { db: None }
    }

    /// Human-readable database status for health checks and the banner.
    pub fn database_status(&self) -> &'static str {
        match self.db {
            Some(_) => "connected",
            None => "not configured",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_status_tracks_handle() {
        assert_eq!(AppState::without_database().database_status(), "not configured");

        let state = AppState::new(Some(Arc::new(Database)));
        assert_eq!(state.database_status(), "connected");
    }
}
