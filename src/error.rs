//! Error types for nikto-gate
//!
//! Every failure the wrapper can produce is surfaced as a distinct variant;
//! nothing is downgraded to a boolean.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building commands, gating the scanner version or scanning
#[derive(Debug, Error)]
pub enum NiktoGateError {
    /// A flag value would be read as a new flag by the receiving process
    #[error("Malformed value for flag '{flag}': '{value}' starts with a flag prefix")]
    MalformedValue {
        /// Flag name, without prefix
        flag: String,
        /// Offending value
        value: String,
    },

    /// Flag names must be non-empty and carry no prefix of their own
    #[error("Invalid flag name: '{0}'")]
    InvalidFlagName(String),

    /// The external process could not be spawned or exited non-zero
    #[error("Process execution failed for '{command}': {reason}")]
    ProcessExecution {
        /// Command name (argument vector element 0)
        command: String,
        /// Spawn error, or exit code with captured stderr
        reason: String,
    },

    /// The version banner did not list the required component
    #[error("Version banner does not list component '{0}'")]
    MissingVersionComponent(String),

    /// A version string could not be read as major.minor.patch
    #[error("Invalid version string: '{0}'")]
    InvalidVersion(String),

    /// The installed scanner is older than the required minimum
    #[error("Invalid version of Nikto: need version {required} or greater, found version {found}")]
    VersionTooLow {
        /// Version reported by the banner
        found: String,
        /// Minimum accepted version
        required: String,
    },

    /// The directory part of an output path does not exist
    #[error("Output directory <{}> doesn't exist", .0.display())]
    OutputDirectoryMissing(PathBuf),

    /// Output paths are passed to the scanner as text and must be valid UTF-8
    #[error("Output path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration: {0}")]
    ReadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),
}

/// Result type alias for nikto-gate operations
pub type Result<T> = std::result::Result<T, NiktoGateError>;
