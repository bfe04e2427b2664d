//! Unified error types for dojo with fail-open philosophy.
//!
//! Progress tracking is a convenience layer around the lessons themselves,
//! so infrastructure errors must never block a learner. When persistence
//! fails we log a warning and continue from safe defaults; the worst visible
//! symptom is progress that does not survive a restart.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dojo operations.
#[derive(Error, Debug)]
pub enum DojoError {
    /// I/O errors from progress file operations.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON or TOML parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// Lesson identifier not present in the lesson catalog.
    #[error("unknown lesson: {lesson_id}")]
    UnknownLesson { lesson_id: String },

    /// Campaign identifier not present in the campaign catalog.
    #[error("unknown campaign: {campaign_id}")]
    UnknownCampaign { campaign_id: String },
}

/// A specialized Result type for dojo operations.
pub type Result<T> = std::result::Result<T, DojoError>;

impl DojoError {
    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown lesson error.
    pub fn unknown_lesson(lesson_id: impl Into<String>) -> Self {
        Self::UnknownLesson {
            lesson_id: lesson_id.into(),
        }
    }

    /// Create an unknown campaign error.
    pub fn unknown_campaign(campaign_id: impl Into<String>) -> Self {
        Self::UnknownCampaign {
            campaign_id: campaign_id.into(),
        }
    }
}

impl From<io::Error> for DojoError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DojoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

/// Trait for fail-open error handling.
///
/// Persistence failures are recovered locally: log the error and return a
/// safe default so the caller keeps going on in-memory state.
pub trait FailOpen<T> {
    /// Handle an error by logging a warning and returning the default value.
    fn fail_open_default(self, context: &str) -> T
    where
        T: Default;

    /// Handle an error by logging a warning and returning the provided fallback.
    fn fail_open_with(self, context: &str, fallback: T) -> T;
}

impl<T> FailOpen<T> for Result<T> {
    fn fail_open_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-open: using default)", context, err);
                T::default()
            }
        }
    }

    fn fail_open_with(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-open: using fallback)", context, err);
                fallback
            }
        }
    }
}
