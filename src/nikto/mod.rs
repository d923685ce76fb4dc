//! # Nikto scan gate
//!
//! Wraps the `nikto` web server scanner. A [`ScanGate`] verifies the installed
//! scanner version once, at construction, and refuses to exist if the version
//! is missing or too old. Scans are then serialized through the command
//! executor, so hosts and output paths are never spliced into shell strings.

pub mod version;

use crate::common::command_utils::{CommandExecutor, Execute, FlagValue, Flags, starts_with_prefix};
use crate::common::path::{FsPathChecker, PathChecker};
use crate::common::process::ProcessOutput;
use crate::config::types::NiktoConfig;
use crate::error::{NiktoGateError, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub use version::{VersionTriple, parse_version_banner, verify_component_version};

pub const NIKTO_COMMAND: &str = "nikto";
pub const VERSION_FLAG: &str = "-Version";
pub const NIKTO_VERSION_NAME: &str = "nikto main";
pub const REQUIRED_NIKTO_VERSION: VersionTriple = VersionTriple::new(2, 1, 4);
/// Lines preceding the version table in `nikto -Version` output
pub const BANNER_HEADER_LINES: usize = 5;

/// Something that can scan a web host
pub trait WebScanner {
    /// Direct subsequent scan reports to `output`
    fn set_output(&mut self, output: &Path) -> Result<()>;

    /// Scan `host`, returning the scanner's captured output
    fn scan(&self, host: &str) -> Result<ProcessOutput>;
}

/// Version-verified handle on the Nikto scanner
#[derive(Debug)]
pub struct ScanGate<E = CommandExecutor, P = FsPathChecker> {
    executor: E,
    path_checker: P,
    config: NiktoConfig,
    version: VersionTriple,
    output: Option<PathBuf>,
}

impl ScanGate {
    /// Gate backed by real processes and the local filesystem
    pub fn system(config: NiktoConfig) -> Result<Self> {
        Self::with_config(CommandExecutor::system(), FsPathChecker::new(), config)
    }
}

impl<E: Execute, P: PathChecker> ScanGate<E, P> {
    /// Verify the scanner with the default settings
    pub fn new(executor: E, path_checker: P) -> Result<Self> {
        Self::with_config(executor, path_checker, NiktoConfig::default())
    }

    /// Verify the scanner described by `config`.
    ///
    /// Fails with the underlying process error, `MissingVersionComponent` or
    /// `VersionTooLow`; no gate exists afterwards in any of those cases.
    pub fn with_config(executor: E, path_checker: P, config: NiktoConfig) -> Result<Self> {
        let version = Self::verify_version(&executor, &config)?;
        info!("Verified {} version {}", config.command, version);

        Ok(Self {
            executor,
            path_checker,
            config,
            version,
            output: None,
        })
    }

    fn verify_version(executor: &E, config: &NiktoConfig) -> Result<VersionTriple> {
        let banner = executor.execute(&config.command, &[config.version_flag.as_str()], &Flags::new())?;
        let versions = parse_version_banner(banner.stdout_lines(), config.banner_header_lines);
        debug!("Parsed {} banner components", versions.len());
        verify_component_version(&versions, &config.version_component, &config.minimum_version)
    }

    /// Version reported by the scanner at construction
    pub fn version(&self) -> VersionTriple {
        self.version
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn config(&self) -> &NiktoConfig {
        &self.config
    }

    /// Record `output` as the report target once its directory is known to exist.
    ///
    /// The path must be valid UTF-8 and must not look like a flag. On failure the
    /// previously recorded target is kept.
    pub fn set_output(&mut self, output: impl AsRef<Path>) -> Result<()> {
        let output = output.as_ref();
        let text = output
            .to_str()
            .ok_or_else(|| NiktoGateError::NonUtf8Path(output.to_path_buf()))?;
        if starts_with_prefix(text) {
            return Err(NiktoGateError::MalformedValue {
                flag: "output".to_string(),
                value: text.to_string(),
            });
        }
        if !self.path_checker.directory_exists(output) {
            return Err(NiktoGateError::OutputDirectoryMissing(output.to_path_buf()));
        }
        debug!("Scan output set to {:?}", output);
        self.output = Some(output.to_path_buf());
        Ok(())
    }

    /// Run one scan of `host`. The host string is passed through untouched.
    pub fn scan(&self, host: &str) -> Result<ProcessOutput> {
        let mut flags = Flags::new();
        flags.insert("host".to_string(), FlagValue::from(host));
        if let Some(output) = &self.output {
            flags.insert("output".to_string(), FlagValue::try_from(output.as_path())?);
        }

        info!("Scanning {}", host);
        self.executor.execute(&self.config.command, &[], &flags)
    }
}

impl<E: Execute, P: PathChecker> WebScanner for ScanGate<E, P> {
    fn set_output(&mut self, output: &Path) -> Result<()> {
        ScanGate::set_output(self, output)
    }

    fn scan(&self, host: &str) -> Result<ProcessOutput> {
        ScanGate::scan(self, host)
    }
}
