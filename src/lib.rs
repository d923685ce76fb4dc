//! # nikto-gate
//!
//! Programmatic, version-gated access to the Nikto web server scanner.
//!
//! ## Features
//!
//! - **Structured commands**: arguments are assembled from a command name,
//!   ordered positional arguments and named flags; values that would be read
//!   as flags are rejected before anything is spawned
//! - **Version gate**: the installed scanner must report at least the
//!   configured minimum version before any scan can run
//! - **Substitutable collaborators**: process execution and path checks sit
//!   behind traits so they can be replaced in tests
//!
//! ## Example
//!
//! ```rust,no_run
//! use nikto_gate::{ScanGate, config::types::NiktoConfig};
//!
//! # fn main() -> nikto_gate::Result<()> {
//! let mut gate = ScanGate::system(NiktoConfig::default())?;
//! gate.set_output("report.txt")?;
//! let output = gate.scan("example.com")?;
//! println!("{}", output.stdout);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod nikto;

// Re-export commonly used types and functions
pub use common::{CommandExecutor, Execute, FlagValue, Flags, PathChecker, ProcessOutput, ProcessRunner};
pub use error::{NiktoGateError, Result};
pub use nikto::{ScanGate, VersionTriple, WebScanner};
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dispatch one subcommand. `json` carries the global `--json` switch.
pub fn run_command(command: Commands, config: &Config, json: bool) -> Result<()> {
    match command {
        Commands::Check { format } => handlers::handle_check(config, format.resolve(json)),
        Commands::Scan { host, output } => handlers::handle_scan(config, host, output),
    }
}
