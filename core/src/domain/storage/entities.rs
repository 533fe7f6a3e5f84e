use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// An uploaded file as written to the blob store.
///
/// The filename is the storage key. Two uploads with the same name share a key
/// and the later one replaces the earlier bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub id: Uuid,
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: i64,
    pub checksum_sha256: String,
    pub stored_at: DateTime<Utc>,
}

impl StoredImage {
    pub fn new(filename: String, path: PathBuf, size_bytes: i64, checksum_sha256: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            filename,
            path,
            size_bytes,
            checksum_sha256,
            stored_at: now,
        }
    }
}
