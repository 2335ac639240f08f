//! Shared application state.
//!
//! The database handle is constructed once at startup and injected
//! here; handlers reach it through axum's `State` extractor. No hidden
//! globals.

use crb_db::Database;

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
