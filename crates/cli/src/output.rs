//! Presentation of a finished census: terminal text and file artifacts.
//!
//! Counts leave the library as `BigUint` and are written as decimal strings
//! everywhere (JSON, CSV, Parquet) so no sink narrows them.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use ribbon::{CensusReport, GenusHistogram};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BinDoc {
    pub genus: usize,
    pub euler_characteristic: i64,
    pub count: String,
}

#[derive(Debug, Serialize)]
pub struct ReportDoc {
    pub vertices: usize,
    pub valence: usize,
    pub arrows: usize,
    pub max_genus: usize,
    pub execution: String,
    pub matchings: String,
    pub connected: String,
    pub disconnected: String,
    pub elapsed_secs: f64,
    pub bins: Vec<BinDoc>,
}

impl ReportDoc {
    pub fn new(report: &CensusReport, elapsed: Duration) -> Self {
        Self {
            vertices: report.vertex_count,
            valence: report.valence,
            arrows: report.arrow_count,
            max_genus: report.max_genus(),
            execution: format!("{:?}", report.execution).to_lowercase(),
            matchings: report.matchings.to_string(),
            connected: report.connected().to_string(),
            disconnected: report.disconnected.to_string(),
            elapsed_secs: elapsed.as_secs_f64(),
            bins: report
                .histogram
                .iter()
                .map(|(genus, count)| BinDoc {
                    genus,
                    euler_characteristic: GenusHistogram::euler_characteristic(genus),
                    count: count.to_string(),
                })
                .collect(),
        }
    }
}

/// Terminal rendering: one line per genus bin, then totals and running time.
pub fn render_text(report: &CensusReport, elapsed: Duration) -> String {
    let mut out = String::new();
    for (genus, count) in report.histogram.iter() {
        out.push_str(&format!("genus={genus} count={count}\n"));
    }
    out.push_str(&format!(
        "matchings={} connected={} disconnected={}\n",
        report.matchings,
        report.connected(),
        report.disconnected
    ));
    out.push_str(&format!("running_time_s={:.3}\n", elapsed.as_secs_f64()));
    out
}

fn histogram_frame(report: &CensusReport) -> PolarsResult<DataFrame> {
    let bins = &report.histogram;
    let genus: Vec<u32> = bins.iter().map(|(g, _)| g as u32).collect();
    let chi: Vec<i64> = bins
        .iter()
        .map(|(g, _)| GenusHistogram::euler_characteristic(g))
        .collect();
    let count: Vec<String> = bins.iter().map(|(_, c)| c.to_string()).collect();
    df!(
        "genus" => genus,
        "euler_characteristic" => chi,
        "count" => count
    )
}

/// Write the report to `path`; the format follows the extension
/// (`json`, `csv`, `parquet`).
pub fn write_report(path: &Path, report: &CensusReport, elapsed: Duration) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            let doc = ReportDoc::new(report, elapsed);
            std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Some("csv") => {
            let mut df = histogram_frame(report)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Some("parquet") => {
            let mut df = histogram_frame(report)?;
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        _ => bail!(
            "unsupported output extension for {} (expected .json, .csv or .parquet)",
            path.display()
        ),
    }
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
