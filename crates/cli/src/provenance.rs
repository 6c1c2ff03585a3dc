//! Provenance sidecar for census artifacts.
//!
//! `census.csv` gets `census.csv.provenance.json` next to it. The full file
//! name is kept so a `.json` and a `.csv` of the same run never share a
//! sidecar.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use ribbon::{CensusReport, SearchCfg};
use serde::Serialize;

/// Inputs that fully determine a census, as resolved by the library.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RunParams {
    pub vertices: usize,
    pub valence: usize,
    pub arrows: usize,
    pub max_genus: usize,
    pub execution: String,
    pub deadline_secs: Option<u64>,
}

impl RunParams {
    pub fn new(report: &CensusReport, scfg: &SearchCfg) -> Self {
        Self {
            vertices: report.vertex_count,
            valence: report.valence,
            arrows: report.arrow_count,
            max_genus: report.max_genus(),
            execution: format!("{:?}", report.execution).to_lowercase(),
            deadline_secs: scfg.deadline.map(|d| d.as_secs()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub ribbon_version: &'static str,
    pub params: RunParams,
    /// Leaf count the run verified, as a decimal string.
    pub matchings: String,
    pub elapsed_secs: f64,
    pub artifact: PathBuf,
}

impl Sidecar {
    pub fn new(
        artifact: &Path,
        report: &CensusReport,
        scfg: &SearchCfg,
        elapsed: Duration,
    ) -> Self {
        Self {
            code_rev: code_rev(),
            ribbon_version: ribbon::VERSION,
            params: RunParams::new(report, scfg),
            matchings: report.matchings.to_string(),
            elapsed_secs: elapsed.as_secs_f64(),
            artifact: artifact.to_path_buf(),
        }
    }

    /// Write next to the artifact and return the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(&self.artifact);
        let bytes = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "census".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `RIBBON_CODE_REV` if set, else the checkout's short hash, else `unknown`.
pub fn code_rev() -> String {
    if let Some(rev) = std::env::var("RIBBON_CODE_REV").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
