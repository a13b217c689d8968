//! Configuration-specific error types.

use super::HotkeyAction;
use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File path was not set
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Theme name does not match any built-in theme
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    /// Hotkey text could not be parsed, e.g. an unknown key name
    #[error("Invalid hotkey '{0}'")]
    InvalidHotkey(String),

    /// One key is bound to two actions in the same view
    #[error("Hotkey '{key}' is bound to both {first:?} and {second:?} in the {view} view")]
    ConflictingHotkey {
        view: String,
        key: String,
        first: HotkeyAction,
        second: HotkeyAction,
    },

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration file
    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create configuration directory
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),
}
