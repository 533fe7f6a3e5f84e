use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{entities::StoredImage, ports::BlobStore},
};

/// Flat directory of uploads. The original filename is the key, with no
/// collision handling and no cleanup.
#[derive(Debug, Clone)]
pub struct FilesystemBlobStore {
    root: PathBuf,
}

impl FilesystemBlobStore {
    /// Open the store, creating the directory if it does not exist yet
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();

        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            tracing::error!(error = %e, root = %root.display(), "Failed to create upload directory");
            CoreError::StorageError(format!("Failed to create upload directory: {}", e))
        })?;

        tracing::info!(root = %root.display(), "Initializing filesystem blob store");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// True when joining `filename` onto the root could land outside of it
fn escapes_root(filename: &str) -> bool {
    Path::new(filename)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
}

impl BlobStore for FilesystemBlobStore {
    #[instrument(skip(self, payload), fields(size = payload.len()))]
    async fn save(&self, filename: &str, payload: Bytes) -> Result<StoredImage, CoreError> {
        // Filenames are used as given. Flag the ones that leave the upload dir.
        if escapes_root(filename) {
            tracing::warn!(
                filename = %filename,
                "Upload filename resolves outside the upload directory"
            );
        }

        let path = self.root.join(filename);

        tokio::fs::write(&path, &payload).await.map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to save upload");
            CoreError::StorageError(format!("Failed to save {}: {}", filename, e))
        })?;

        let checksum = hex::encode(Sha256::digest(&payload));
        let size_bytes = i64::try_from(payload.len()).unwrap_or(i64::MAX);

        tracing::debug!(path = %path.display(), "Saved file");

        Ok(StoredImage::new(
            filename.to_string(),
            path,
            size_bytes,
            checksum,
        ))
    }

    #[instrument(skip(self))]
    async fn read(&self, filename: &str) -> Result<Bytes, CoreError> {
        if filename.is_empty() || escapes_root(filename) {
            tracing::warn!(filename = %filename, "Rejected read outside the upload directory");
            return Err(CoreError::NotFound);
        }

        let path = self.root.join(filename);

        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Err(CoreError::NotFound),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(CoreError::NotFound),
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Failed to stat upload");
                return Err(CoreError::StorageError(e.to_string()));
            }
        }

        tokio::fs::read(&path).await.map(Bytes::from).map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to read upload");
            CoreError::StorageError(format!("Failed to read {}: {}", filename, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    async fn temp_store() -> FilesystemBlobStore {
        let root = std::env::temp_dir().join(format!("freshlens-blobs-{}", Uuid::new_v4()));
        FilesystemBlobStore::new(root).await.unwrap()
    }

    #[tokio::test]
    async fn test_new_creates_directory() {
        let store = temp_store().await;
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn test_save_then_read() {
        let store = temp_store().await;

        let stored = store
            .save("hello.txt", Bytes::from_static(b"hello"))
            .await
            .unwrap();

        assert_eq!(stored.filename, "hello.txt");
        assert_eq!(stored.path, store.root().join("hello.txt"));
        assert_eq!(stored.size_bytes, 5);
        assert_eq!(
            stored.checksum_sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );

        let data = store.read("hello.txt").await.unwrap();
        assert_eq!(&data[..], b"hello");
    }

    #[tokio::test]
    async fn test_save_overwrites_same_name() {
        let store = temp_store().await;

        store
            .save("dish.jpg", Bytes::from_static(b"first"))
            .await
            .unwrap();
        store
            .save("dish.jpg", Bytes::from_static(b"second"))
            .await
            .unwrap();

        let data = store.read("dish.jpg").await.unwrap();
        assert_eq!(&data[..], b"second");
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let store = temp_store().await;
        assert_eq!(store.read("never.png").await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_read_outside_root_is_not_found() {
        let store = temp_store().await;
        assert_eq!(store.read("../secret.txt").await, Err(CoreError::NotFound));
        assert_eq!(store.read("/etc/hostname").await, Err(CoreError::NotFound));
        assert_eq!(store.read("").await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_read_directory_is_not_found() {
        let store = temp_store().await;
        tokio::fs::create_dir(store.root().join("nested")).await.unwrap();
        assert_eq!(store.read("nested").await, Err(CoreError::NotFound));
    }

    #[test]
    fn test_escapes_root() {
        assert!(escapes_root("../up.png"));
        assert!(escapes_root("/abs.png"));
        assert!(escapes_root("./here.png"));
        assert!(!escapes_root("plain.png"));
        assert!(!escapes_root("sub/dir.png"));
    }
}
