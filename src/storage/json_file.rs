use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// A single user-submitted review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Seconds since epoch with sub-second precision, assigned at creation
    pub id: f64,
    pub author: String,
    pub rating: u8,
    pub text: String,
    /// ISO-8601 text; records missing it load as ""
    #[serde(default)]
    pub date: String,
    /// Passthrough field, no validation; serialized as null when absent
    #[serde(default)]
    pub telegram_id: Option<serde_json::Value>,
}

/// Storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read reviews file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write reviews file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-document JSON storage for the review collection.
///
/// Every operation reads or replaces the backing file in full; there is no
/// locking, so concurrent writers race and the last one wins.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create the backing file (and parent directories) if absent
    pub fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        if !self.path.exists() {
            self.save(&[])?;
            info!(path = %self.path.display(), "Created empty reviews file");
        }

        Ok(())
    }

    /// Load the full review collection.
    ///
    /// A missing or unparseable file reads as an empty collection; only an
    /// I/O failure on an existing file is reported as an error. Create-on-
    /// first-run depends on the lenient path, so it must not become strict.
    pub fn load(&self) -> Result<Vec<Review>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_str(&content) {
            Ok(reviews) => Ok(reviews),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Reviews file not parseable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the given collection and overwrite the file in full.
    ///
    /// Output is pretty-printed with non-ASCII text stored verbatim so the
    /// file stays readable for operators.
    pub fn save(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(reviews)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Number of stored reviews
    pub fn count(&self) -> usize {
        self.load().map(|reviews| reviews.len()).unwrap_or(0)
    }
}
