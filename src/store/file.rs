//! File-based progress storage for dojo.
//!
//! The record is stored as a single JSON file, `~/.dojo/progress.json` by
//! default (the file-system analog of the site's fixed local-storage key).
//! Atomic writes are achieved via temp file + rename pattern.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::progress_path;
use crate::core::ProgressRecord;
use crate::error::{DojoError, Result};
use crate::store::ProgressStore;

/// File-based progress storage.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    /// Path of the progress file.
    path: PathBuf,
}

impl FileProgressStore {
    /// Create a file store at the default location.
    ///
    /// Uses `~/.dojo/progress.json` or `$DOJO_HOME/progress.json`. Failing
    /// to determine a home directory is a wiring problem, not a runtime
    /// condition, so it errors loudly instead of silently defaulting.
    pub fn new() -> Result<Self> {
        let path = progress_path().ok_or_else(|| {
            DojoError::config("Could not determine progress file location (no home directory)")
        })?;
        Ok(Self::with_path(path))
    }

    /// Create a file store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path for the temp file used during atomic writes.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "progress.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    /// Write the record atomically using temp file + rename.
    fn atomic_write(&self, record: &ProgressRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| DojoError::storage(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;

        let temp_path = self.temp_path();
        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| DojoError::storage(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| DojoError::storage(&temp_path, e))?;
            file.sync_all()
                .map_err(|e| DojoError::storage(&temp_path, e))?;
        }

        // Rename temp file to final path (atomic on POSIX)
        fs::rename(&temp_path, &self.path).map_err(|e| DojoError::storage(&self.path, e))?;

        Ok(())
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> Result<Option<ProgressRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| DojoError::storage(&self.path, e))?;

        let record: ProgressRecord = serde_json::from_str(&content)?;

        Ok(Some(record))
    }

    fn save(&self, record: &ProgressRecord) -> Result<()> {
        self.atomic_write(record)
    }
}
