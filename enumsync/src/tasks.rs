//! Built-in task table for the RocksDB statistics and perf flag enums.
//!
//! Order matters: the output lists the enums in the order below.

use enumsync_codegen::{GeneratorConfig, Provenance};
use enumsync_scan::{Repr, ScanError, Task};

/// RocksDB public headers, relative to the directory the generator runs in.
pub const ROCKSDB_HEADER_ROOT: &str = "../rocksdb/include/rocksdb";

/// Returns the generator configuration for the RocksDB headers.
#[must_use]
pub fn rocksdb_config() -> GeneratorConfig {
    GeneratorConfig::new()
        .header_root(ROCKSDB_HEADER_ROOT)
        .provenance(Provenance::new("enumsync", "RocksDB"))
}

/// Builds the RocksDB task table.
///
/// # Errors
/// Returns `ScanError` if a pattern fails to compile.
pub fn rocksdb_tasks() -> Result<Vec<Task>, ScanError> {
    Ok(vec![
        Task::builder("DBStatisticsTickerType", "statistics.h")
            .begin(r"enum Tickers .* \{")
            .build()?,
        Task::builder("DBStatisticsHistogramType", "statistics.h")
            .begin(r"enum Histograms .* \{")
            .build()?,
        Task::builder("PerfFlag", "perf_flag.h")
            .begin(r"enum PerfFlag .* \{")
            .repr(Repr::U32)
            .build()?,
    ])
}
