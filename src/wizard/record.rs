//! The finished configuration record and its emitter
//!
//! The record is written once, after the terminal has been restored:
//! compact JSON plus a newline on stdout, or the bare JSON into a file.

use super::catalog::{Framework, Module, PackageManager};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Output artifact of a completed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub directory: String,
    pub app_name: String,
    pub domain: String,
    pub framework: Framework,
    /// Selected modules in catalog order
    pub modules: Vec<Module>,
    pub package_manager: PackageManager,
}

impl ConfigRecord {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to encode configuration record")
    }
}

/// Where the record goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> Destination<'a> {
    /// Blank or missing paths mean stdout
    pub fn from_flag(output: Option<&'a str>) -> Self {
        match output {
            Some(path) if !path.trim().is_empty() => Destination::File(Path::new(path)),
            _ => Destination::Stdout,
        }
    }
}

/// Write the record to its destination
pub fn emit(record: &ConfigRecord, destination: &Destination<'_>) -> Result<()> {
    let payload = record.to_json()?;

    match destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_line(&mut handle, &payload).context("Failed to write record to stdout")?;
            tracing::info!("Record written to stdout");
        }
        Destination::File(path) => {
            write_file(path, &payload)
                .with_context(|| format!("Failed to write record to {}", path.display()))?;
            tracing::info!("Record written to {}", path.display());
        }
    }

    Ok(())
}

fn write_line<W: Write>(writer: &mut W, payload: &str) -> std::io::Result<()> {
    writeln!(writer, "{}", payload)?;
    writer.flush()
}

/// Create or truncate `path` with owner rw, group/other r
fn write_file(path: &Path, payload: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(payload.as_bytes())?;
    file.flush()
}
