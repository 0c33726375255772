//! File-backed key-value store: each key is one file in the data directory.
//!
//! Writes go to a temporary sibling first and are renamed into place, so a reader
//! never observes a half-written value. Each write gets its own temporary file;
//! overlapping writes to one key resolve as last-rename-wins.

use crate::{models::RepositoryError, repositories::KeyValueStore};
use async_trait::async_trait;
use log::debug;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Maps a key onto a file name. `:` becomes `_`; anything else outside
    /// `[A-Za-z0-9_-]` is rejected so a key can never escape the data directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, RepositoryError> {
        let file_stem: String = key.replace(':', "_");
        let valid = !file_stem.is_empty()
            && file_stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidData(format!(
                "Key '{}' cannot be stored as a file",
                key
            )));
        }
        Ok(self.data_dir.join(format!("{}.json", file_stem)))
    }

    fn io_error(context: &str, error: std::io::Error) -> RepositoryError {
        RepositoryError::Other(format!("Failed to {}: {}", context, error))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error("read value", e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| Self::io_error("create data directory", e))?;

        let tmp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = tokio::fs::write(&tmp_path, value).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(Self::io_error("write value", e));
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(Self::io_error("replace value", e));
        }

        debug!("Stored key {} at {}", key, path.display());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error("delete value", e)),
        }
    }
}
