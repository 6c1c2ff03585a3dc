use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ribbon::bounds::{matching_count, max_connected_genus};
use ribbon::{Census, Execution, RibbonCfg, SearchCfg};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;

#[derive(Parser)]
#[command(name = "ribbon-cli")]
#[command(about = "Genus census of ribbon graphs with uniform valence")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate every matching and print exact counts per genus
    Count {
        #[arg(long, default_value_t = RibbonCfg::default().vertex_count)]
        vertices: usize,
        #[arg(long, default_value_t = RibbonCfg::default().valence)]
        valence: usize,
        /// Highest genus bin; defaults to the largest genus reachable
        #[arg(long)]
        max_genus: Option<usize>,
        /// Run each top-level branch as its own task
        #[arg(long)]
        parallel: bool,
        /// Give up (between branches) after this many seconds
        #[arg(long)]
        deadline_secs: Option<u64>,
        /// Write the histogram to .json, .csv or .parquet (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the size of the search without enumerating
    Bounds {
        #[arg(long, default_value_t = RibbonCfg::default().vertex_count)]
        vertices: usize,
        #[arg(long, default_value_t = RibbonCfg::default().valence)]
        valence: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Count {
            vertices,
            valence,
            max_genus,
            parallel,
            deadline_secs,
            out,
        } => {
            let cfg = RibbonCfg {
                vertex_count: vertices,
                valence,
                max_genus,
            };
            let scfg = SearchCfg {
                execution: if parallel {
                    Execution::Parallel
                } else {
                    Execution::Sequential
                },
                deadline: deadline_secs.map(Duration::from_secs),
            };
            count(cfg, scfg, out)
        }
        Action::Bounds { vertices, valence } => bounds(vertices, valence),
        Action::Report => report(),
    }
}

fn count(cfg: RibbonCfg, scfg: SearchCfg, out: Option<PathBuf>) -> Result<()> {
    let census = Census::new(cfg).context("invalid census parameters")?;
    tracing::info!(
        vertices = census.vertex_count(),
        valence = census.valence(),
        max_genus = census.max_genus(),
        out = ?out,
        "count"
    );
    let start = Instant::now();
    let result = census.run(scfg);
    let elapsed = start.elapsed();
    let report = match result {
        Ok(report) => report,
        Err(err) if err.is_internal() => {
            tracing::error!(%err, "census aborted on an internal inconsistency");
            return Err(err).context("census aborted; this is a bug in the scoring pipeline");
        }
        Err(err) => return Err(err.into()),
    };
    print!("{}", output::render_text(&report, elapsed));

    if let Some(path) = out {
        output::write_report(&path, &report, elapsed)?;
        let prov = provenance::Sidecar::new(&path, &report, &scfg, elapsed).write()?;
        tracing::info!(provenance = %prov.display(), "sidecar written");
    }
    Ok(())
}

fn bounds(vertices: usize, valence: usize) -> Result<()> {
    let census = Census::new(RibbonCfg::new(vertices, valence))
        .context("invalid census parameters")?;
    let arrows = census.arrow_count();
    let obj = serde_json::json!({
        "vertices": vertices,
        "valence": valence,
        "arrows": arrows,
        "edges": arrows / 2,
        "matchings": matching_count(arrows).to_string(),
        "max_genus": max_connected_genus(vertices, arrows),
        "branches": arrows - 1,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let defaults = RibbonCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "ribbon_version": ribbon::VERSION,
        "params": {
            "vertices": defaults.vertex_count,
            "valence": defaults.valence
        },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
