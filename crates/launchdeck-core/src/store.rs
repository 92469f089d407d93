//! File-backed link storage
//!
//! The entire collection is persisted as one pretty-printed JSON array. All
//! reads and writes are serialized through a single lock, and writes go
//! through a temp file + rename so a reader never observes a half-written
//! array.
//!
//! Storage location: `<data_dir>/links.json` (configurable via [`Config`])

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::Link;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create data directory (startup)
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create the initial collection file (startup)
    #[error("Failed to create '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the collection file
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the collection file
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Collection file content is not a valid JSON array of links
    #[error("Invalid link data in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode the collection as JSON
    #[error("Failed to encode links: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store owning serialized access to the persisted link collection
///
/// Cloning is cheap; all clones share the same lock, so exactly one
/// filesystem operation against the collection file proceeds at a time.
#[derive(Clone)]
pub struct LinkStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl LinkStore {
    /// Open the store, preparing the backing file on first run
    ///
    /// Creates the data directory recursively if absent, and seeds the
    /// collection file with an empty array if it does not exist. Failure
    /// here means the service cannot run; callers abort startup on error.
    pub fn open(config: &Config) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir).map_err(|source| {
            StoreError::CreateDirectory {
                path: config.data_dir.clone(),
                source,
            }
        })?;

        let path = config.data_path();
        if !path.exists() {
            info!("{} not found, creating", path.display());
            std::fs::write(&path, b"[]").map_err(|source| StoreError::CreateFile {
                path: path.clone(),
                source,
            })?;
        }

        Ok(Self {
            path,
            lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the backing collection file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection
    ///
    /// Returns an empty collection if the file is missing (it should have
    /// been created by [`LinkStore::open`], but an external delete must not
    /// take the API down).
    pub async fn load(&self) -> StoreResult<Vec<Link>> {
        let _guard = self.lock.lock().await;

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the full collection
    ///
    /// The given links become the entire persisted state; anything not in
    /// `links` is dropped.
    pub async fn save(&self, links: &[Link]) -> StoreResult<()> {
        let bytes =
            serde_json::to_vec_pretty(links).map_err(|source| StoreError::Serialize { source })?;

        let _guard = self.lock.lock().await;
        atomic_write(&self.path, &bytes).await?;

        debug!(count = links.len(), "replaced link collection");
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
async fn atomic_write(path: &Path, data: &[u8]) -> StoreResult<()> {
    // Temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(&temp_path).await.map_err(write_err)?;
    file.write_all(data).await.map_err(write_err)?;

    // Sync to disk before rename
    file.sync_all().await.map_err(write_err)?;

    tokio::fs::rename(&temp_path, path).await.map_err(write_err)?;

    Ok(())
}
