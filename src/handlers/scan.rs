use crate::{
    common::ProcessOutput,
    config::types::Config,
    error::Result,
    nikto::{ScanGate, WebScanner},
};
use log::info;
use std::path::{Path, PathBuf};

/// Point `scanner` at `output` when one is given, then scan `host`
pub fn run_scan<S: WebScanner + ?Sized>(
    scanner: &mut S,
    host: &str,
    output: Option<&Path>,
) -> Result<ProcessOutput> {
    if let Some(output) = output {
        scanner.set_output(output)?;
        info!("Writing report to {}", output.display());
    }
    scanner.scan(host)
}

pub fn handle_scan(config: &Config, host: String, output: Option<PathBuf>) -> Result<()> {
    let mut gate = ScanGate::system(config.nikto.clone())?;
    let output = output.or_else(|| config.nikto.output.clone());

    let result = run_scan(&mut gate, &host, output.as_deref())?;
    print!("{}", result.stdout);
    Ok(())
}
