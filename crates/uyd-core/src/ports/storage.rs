use async_trait::async_trait;
use thiserror::Error;

/// File extensions accepted by the image store, lowercase, without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Errors from the image store.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No filename provided")]
    MissingFilename,

    #[error("File type not allowed. Allowed types: jpg, jpeg, png, gif, webp")]
    UnsupportedMediaType,

    #[error("File too large. Maximum size is {max_mib}MB")]
    PayloadTooLarge { max_mib: usize },

    #[error("Error saving file: {0}")]
    Io(#[from] std::io::Error),
}

/// Validated binary image storage.
///
/// `save` rejects the upload before touching disk when the filename is
/// empty, the extension is not allow-listed or the content exceeds the size
/// ceiling. Accepted files are written under a unique random name and
/// referenced by the returned relative path.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `content` and return a path of the form
    /// `assets/upload/<generated-name>`.
    async fn save(&self, filename: &str, content: &[u8]) -> Result<String, UploadError>;

    /// Remove a previously stored file by its base name. Returns false when
    /// no such file exists.
    async fn delete(&self, name: &str) -> Result<bool, UploadError>;
}
