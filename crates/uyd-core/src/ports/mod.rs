//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod storage;

pub use repository::{EventRepository, NewsRepository, ProgramRepository};
pub use storage::{ALLOWED_EXTENSIONS, ImageStore, MAX_FILE_SIZE, UploadError};
