//! A JSON document on disk, read and written as a whole.
//!
//! Every repository in this crate keeps one document. Access goes through a
//! `tokio::sync::Mutex` so a read-modify-write never interleaves with another
//! in the same process. Writes go to a sibling temp file first and are then
//! renamed over the document.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use stylemate_core::RepositoryError;

/// Errors raised while reading or writing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<DocumentError> for RepositoryError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::Io { .. } => Self::Storage(e.to_string()),
            DocumentError::Malformed { .. } => Self::Serialization(e.to_string()),
        }
    }
}

/// A typed JSON document. A missing file reads as `T::default()`.
pub struct JsonDocument<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: std::marker::PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current contents.
    pub async fn read(&self) -> Result<T, DocumentError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Apply `f` to the contents and write the result back.
    ///
    /// Nothing is written if `f` returns an error.
    pub async fn update<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<DocumentError>,
    {
        let _guard = self.lock.lock().await;
        let mut value = self.load().await?;
        let out = f(&mut value)?;
        self.store(&value).await?;
        Ok(out)
    }

    /// Replace the contents.
    pub async fn write(&self, value: &T) -> Result<(), DocumentError> {
        let _guard = self.lock.lock().await;
        self.store(value).await
    }

    async fn load(&self) -> Result<T, DocumentError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Document missing, using default");
                return Ok(T::default());
            }
            Err(source) => {
                return Err(DocumentError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| DocumentError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn store(&self, value: &T) -> Result<(), DocumentError> {
        let io_err = |source| DocumentError::Io {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(value).map_err(|source| DocumentError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await.map_err(io_err)?;
        fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        debug!(path = %self.path.display(), "Document written");
        Ok(())
    }
}
