use crate::nikto::{
    BANNER_HEADER_LINES, NIKTO_COMMAND, NIKTO_VERSION_NAME, REQUIRED_NIKTO_VERSION, VERSION_FLAG,
    VersionTriple,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub nikto: NiktoConfig,
}

/// How to locate, verify and drive the Nikto scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiktoConfig {
    /// Executable name or path
    pub command: String,
    /// Positional argument that prints the version banner
    pub version_flag: String,
    /// Banner component whose version is gated
    pub version_component: String,
    /// Oldest accepted version, as "major.minor.patch"
    pub minimum_version: VersionTriple,
    /// Banner lines to skip before the version table
    pub banner_header_lines: usize,
    /// Default report file for scans
    pub output: Option<PathBuf>,
}

impl Default for NiktoConfig {
    fn default() -> Self {
        Self {
            command: NIKTO_COMMAND.to_string(),
            version_flag: VERSION_FLAG.to_string(),
            version_component: NIKTO_VERSION_NAME.to_string(),
            minimum_version: REQUIRED_NIKTO_VERSION,
            banner_header_lines: BANNER_HEADER_LINES,
            output: None,
        }
    }
}
