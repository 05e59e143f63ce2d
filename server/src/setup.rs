use anyhow::{Context, Result};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use taskd_database::SqliteTaskStore;
use taskd_rest::{router, AppState};
use tracing::info;

use crate::config::Config;

/// Create the task store from configuration and ensure the schema exists.
///
/// Any failure here is fatal: the process must not serve requests against a
/// missing or malformed schema.
pub async fn create_store(config: &Config) -> Result<Arc<SqliteTaskStore>> {
    let database_url = config.database_url();
    info!("Using database URL: {}", database_url);

    ensure_database_directory(&database_url)?;

    let store = SqliteTaskStore::new(&database_url, config.database.max_connections)
        .await
        .context("Failed to connect to database")?;

    store
        .init_schema()
        .await
        .context("Failed to create task schema")?;

    info!("Task store ready");
    Ok(Arc::new(store))
}

/// Build the HTTP application around the store.
pub fn build_app(store: Arc<SqliteTaskStore>, config: &Config) -> Router {
    let state = AppState::new(store, config.request_timeout());
    router(state)
}

/// Ensure the database directory exists for file-backed stores
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        let db_path = Path::new(db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                info!("Creating database directory: {}", parent.display());
                std::fs::create_dir_all(parent)
                    .context("Failed to create database directory")?;
            }
        }
    }
    Ok(())
}
