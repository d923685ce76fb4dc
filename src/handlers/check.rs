use crate::{
    cli::OutputFormat,
    common::{Execute, PathChecker},
    config::types::Config,
    error::Result,
    nikto::{ScanGate, VersionTriple},
};
use colored::Colorize;
use serde::Serialize;

/// Outcome of a successful version check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub command: String,
    pub version: VersionTriple,
    pub required: VersionTriple,
}

impl CheckReport {
    pub fn from_gate<E: Execute, P: PathChecker>(gate: &ScanGate<E, P>) -> Self {
        Self {
            command: gate.config().command.clone(),
            version: gate.version(),
            required: gate.config().minimum_version,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(format!(
                "{} {} {} (required >= {})",
                "✅".green(),
                self.command.bold(),
                self.version.to_string().green(),
                self.required
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

pub fn handle_check(config: &Config, format: OutputFormat) -> Result<()> {
    let gate = ScanGate::system(config.nikto.clone())?;
    println!("{}", CheckReport::from_gate(&gate).render(format)?);
    Ok(())
}
