//! Local-filesystem image store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use uyd_core::ports::{ALLOWED_EXTENSIONS, ImageStore, MAX_FILE_SIZE, UploadError};

/// Path prefix under which stored files are referenced by callers.
const UPLOAD_PATH_PREFIX: &str = "assets/upload";

/// Image store writing into a single upload directory.
///
/// Generated names are uuid-v4 plus the original extension, so concurrent
/// uploads never race on a path. Nothing maps stored files back to the
/// entities referencing them; orphaned files are not collected.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Lowercased extension of `filename`, without the dot.
    fn extension(filename: &str) -> Option<String> {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    fn validate(filename: &str, content: &[u8]) -> Result<String, UploadError> {
        if filename.is_empty() {
            return Err(UploadError::MissingFilename);
        }

        let extension = Self::extension(filename).ok_or(UploadError::UnsupportedMediaType)?;
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedMediaType);
        }

        if content.len() > MAX_FILE_SIZE {
            return Err(UploadError::PayloadTooLarge {
                max_mib: MAX_FILE_SIZE / (1024 * 1024),
            });
        }

        Ok(extension)
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, filename: &str, content: &[u8]) -> Result<String, UploadError> {
        let extension = Self::validate(filename, content)?;

        let unique_name = format!("{}.{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&unique_name), content).await?;

        tracing::debug!(name = %unique_name, bytes = content.len(), "Stored uploaded image");
        Ok(format!("{UPLOAD_PATH_PREFIX}/{unique_name}"))
    }

    async fn delete(&self, name: &str) -> Result<bool, UploadError> {
        // Strip any directory components so callers cannot escape the root.
        let base_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(UploadError::MissingFilename)?;

        match tokio::fs::remove_file(self.root.join(base_name)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(UploadError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, LocalImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("upload"));
        (dir, store)
    }

    #[tokio::test]
    async fn save_round_trips_bytes() {
        let (_dir, store) = store();
        let content = b"\x89PNG fake image body";

        let path = store.save("photo.PNG", content).await.unwrap();

        assert!(path.starts_with("assets/upload/"), "{path}");
        assert!(path.ends_with(".png"), "{path}");

        let name = path.rsplit('/').next().unwrap();
        let written = tokio::fs::read(store.root.join(name)).await.unwrap();
        assert_eq!(written, content);
    }

    #[tokio::test]
    async fn rejects_disallowed_extension_without_writing() {
        let (_dir, store) = store();

        let err = store.save("malware.exe", b"MZ").await.unwrap_err();

        assert!(matches!(err, UploadError::UnsupportedMediaType));
        assert!(!store.root.exists());
    }

    #[tokio::test]
    async fn rejects_oversized_file_without_writing() {
        let (_dir, store) = store();
        let content = vec![0u8; 11 * 1024 * 1024];

        let err = store.save("big.png", &content).await.unwrap_err();

        assert!(matches!(err, UploadError::PayloadTooLarge { max_mib: 10 }));
        assert!(!store.root.exists());
    }

    #[tokio::test]
    async fn rejects_empty_filename() {
        let (_dir, store) = store();

        let err = store.save("", b"data").await.unwrap_err();

        assert!(matches!(err, UploadError::MissingFilename));
    }

    #[tokio::test]
    async fn accepts_file_at_size_ceiling() {
        let (_dir, store) = store();
        let content = vec![0u8; MAX_FILE_SIZE];

        let path = store.save("exact.jpg", &content).await.unwrap();
        assert!(path.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn delete_removes_stored_file() {
        let (_dir, store) = store();
        let path = store.save("gone.webp", b"bytes").await.unwrap();
        let name = path.rsplit('/').next().unwrap();

        assert!(store.delete(name).await.unwrap());
        assert!(!store.root.join(name).exists());
    }

    #[tokio::test]
    async fn delete_of_missing_file_returns_false() {
        let (_dir, store) = store();
        tokio::fs::create_dir_all(&store.root).await.unwrap();

        assert!(!store.delete("nothing-here.png").await.unwrap());
    }

    #[tokio::test]
    async fn delete_ignores_directory_components() {
        let (_dir, store) = store();
        let path = store.save("pic.gif", b"gif").await.unwrap();
        let name = path.rsplit('/').next().unwrap();

        // A caller passing the full relative path still hits the same file.
        assert!(store.delete(&format!("assets/upload/{name}")).await.unwrap());
    }
}
