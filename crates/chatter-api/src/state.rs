use std::sync::Arc;

use tracing::error;

use chatter_db::{AccountStore, Database, MessageStore};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: Arc<dyn AccountStore>,
    pub messages: Arc<dyn MessageStore>,
}

impl AppStateInner {
    pub fn new(accounts: Arc<dyn AccountStore>, messages: Arc<dyn MessageStore>) -> AppState {
        Arc::new(Self { accounts, messages })
    }

    /// Backs both stores with the same SQLite database.
    pub fn with_database(db: Database) -> AppState {
        let db = Arc::new(db);
        Self::new(db.clone(), db)
    }
}

/// Run a synchronous store call off the async runtime.
pub(crate) async fn blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.into())
        })?
        .map_err(ApiError::Internal)
}
