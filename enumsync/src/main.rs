//! Prints the generated RocksDB binding enums to standard output.
//!
//! Logs go to standard error; set `RUST_LOG=enumsync=debug` for per-task
//! details.

use anyhow::Context;
use enumsync::Generator;
use enumsync::tasks::{rocksdb_config, rocksdb_tasks};
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let tasks = rocksdb_tasks().context("invalid built-in task table")?;
    let generator = Generator::new(rocksdb_config());

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    let summary = generator
        .run(&tasks, &mut sink)
        .context("enum generation failed")?;

    tracing::debug!(tasks = summary.reports.len(), "generation finished");
    Ok(())
}
