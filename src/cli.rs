use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nikto-gate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the Nikto web server scanner behind a version gate")]
#[command(long_about = "Verifies that the installed Nikto meets the minimum supported version, then runs scans with arguments assembled from structured input instead of shell strings.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify the installed Nikto version
    Check {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Scan a web host
    Scan {
        /// Host name, IP address or URL to scan
        #[arg(value_name = "HOST")]
        host: String,

        /// Report file written by Nikto (overrides the configured output)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// `--json` wins over whatever `--format` asked for
    pub fn resolve(self, json: bool) -> Self {
        if json { OutputFormat::Json } else { self }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_with_output() {
        let cli = Cli::parse_from(["nikto-gate", "-vv", "scan", "example.com", "--output", "report.txt"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan { host, output } => {
                assert_eq!(host, "example.com");
                assert_eq!(output, Some(PathBuf::from("report.txt")));
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_parse_check_json() {
        let cli = Cli::parse_from(["nikto-gate", "check", "--format", "json"]);
        assert!(matches!(cli.command, Commands::Check { format: OutputFormat::Json }));
    }

    #[test]
    fn test_global_json_flag_before_and_after_subcommand() {
        for args in [["nikto-gate", "--json", "check"], ["nikto-gate", "check", "--json"]] {
            let cli = Cli::parse_from(args);
            assert!(cli.json);
            let Commands::Check { format } = cli.command else {
                panic!("expected check command");
            };
            assert_eq!(format, OutputFormat::Table);
            assert_eq!(format.resolve(cli.json), OutputFormat::Json);
        }
    }

    #[test]
    fn test_json_flag_defaults_off() {
        let cli = Cli::parse_from(["nikto-gate", "check"]);
        assert!(!cli.json);
        assert_eq!(OutputFormat::Table.resolve(cli.json), OutputFormat::Table);
        assert_eq!(OutputFormat::Json.resolve(false), OutputFormat::Json);
    }
}
