//! Core error types for studypal-core.
//!
//! Domain operations fail with [`StudyError`], which is always a local
//! validation failure meant to be shown to the user. Configuration I/O
//! fails with [`ConfigError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskId;

/// Validation failures raised by catalog, task store and timer commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudyError {
    /// Subject name is blank or already in the catalog
    #[error("subject name is empty or already exists: '{0}'")]
    DuplicateSubject(String),

    /// Subject cannot be removed
    #[error("subject '{0}' is permanent and cannot be removed")]
    ProtectedSubject(String),

    /// Subject is not in the catalog
    #[error("unknown subject: '{0}'")]
    UnknownSubject(String),

    /// Task description is blank
    #[error("task description must not be empty")]
    EmptyDescription,

    /// No task carries this id
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// A focus session is already occupying the timer
    #[error("a focus session is already running")]
    AlreadyRunning,

    /// Cancel requested while idle
    #[error("no focus session is running")]
    NotRunning,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be resolved or created
    #[error("Failed to prepare config directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Result type alias for StudyError
pub type Result<T, E = StudyError> = std::result::Result<T, E>;
