//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use uyd_core::ports::{EventRepository, ImageStore, NewsRepository, ProgramRepository};
use uyd_infra::database::{
    DbConn, SeaOrmEventRepository, SeaOrmNewsRepository, SeaOrmProgramRepository,
};
use uyd_infra::storage::LocalImageStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub programs: Arc<dyn ProgramRepository>,
    pub events: Arc<dyn EventRepository>,
    pub news: Arc<dyn NewsRepository>,
    pub images: Arc<dyn ImageStore>,
}

impl AppState {
    /// Build the application state on top of an open connection pool.
    pub fn new(db: DbConn, upload_dir: &Path) -> Self {
        Self {
            programs: Arc::new(SeaOrmProgramRepository::new(db.clone())),
            events: Arc::new(SeaOrmEventRepository::new(db.clone())),
            news: Arc::new(SeaOrmNewsRepository::new(db)),
            images: Arc::new(LocalImageStore::new(upload_dir)),
        }
    }
}
