//! Genus tables for small tetravalent families, with timings.
//!
//! Prints one block per shape: exact counts per genus, matchings visited,
//! disconnected matchings, and wall-clock time in both execution modes.
//!
//! Run: `cargo run --release -p ribbon --example genus_table`

use std::time::Instant;

use ribbon::prelude::*;

fn main() {
    for vertex_count in 1..=4 {
        let census = Census::new(RibbonCfg::new(vertex_count, 4)).expect("even arrow count");
        for execution in [Execution::Sequential, Execution::Parallel] {
            let start = Instant::now();
            let report = census
                .run(SearchCfg {
                    execution,
                    deadline: None,
                })
                .expect("census succeeds");
            let elapsed = start.elapsed().as_secs_f64() * 1e3;
            println!(
                "vertices={vertex_count} valence=4 execution={execution:?} matchings={} disconnected={} time_ms={elapsed:.3}",
                report.matchings, report.disconnected
            );
            if execution == Execution::Sequential {
                for (genus, count) in report.histogram.iter() {
                    println!("  genus={genus} count={count}");
                }
            }
        }
    }
}
