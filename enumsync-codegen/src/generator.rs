//! Generation run over an ordered list of tasks.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::rust::{EnumGenerator, generate_provenance};
use enumsync_scan::{BlockScanner, ScanEvent, Task};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// What a single task produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The block was found and closed.
    Emitted {
        /// Number of members written.
        members: u32,
    },
    /// The begin pattern never matched; nothing was written.
    NotFound,
    /// The block was opened but the end pattern never matched.
    Unterminated {
        /// Number of members written.
        members: u32,
    },
}

/// Outcome of one task in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    /// Name of the generated enum.
    pub task: String,
    /// What the task produced.
    pub outcome: TaskOutcome,
}

/// Per-task outcomes of a run, in task order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One report per task.
    pub reports: Vec<TaskReport>,
}

impl RunSummary {
    /// Returns true if every task emitted a closed block.
    #[must_use]
    pub fn all_emitted(&self) -> bool {
        self.reports
            .iter()
            .all(|r| matches!(r.outcome, TaskOutcome::Emitted { .. }))
    }

    /// Looks up the outcome of a task by enum name.
    #[must_use]
    pub fn outcome(&self, task: &str) -> Option<TaskOutcome> {
        self.reports
            .iter()
            .find(|r| r.task == task)
            .map(|r| r.outcome)
    }
}

/// Turns header enum blocks into Rust enum declarations.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs every task in order, writing the generated source to `sink`.
    ///
    /// The provenance comment is written first, then each task's
    /// declaration as its header is scanned.
    ///
    /// # Errors
    /// Returns `CodegenError::Source` as soon as a header cannot be opened
    /// or read; later tasks are not run. Returns `CodegenError::Io` if the
    /// sink fails.
    pub fn run<W: Write>(&self, tasks: &[Task], sink: &mut W) -> Result<RunSummary, CodegenError> {
        sink.write_all(generate_provenance(self.config.provenance_notice()).as_bytes())?;

        let mut summary = RunSummary::default();
        for task in tasks {
            let path = self.config.resolve(task.source());
            tracing::debug!(task = task.name(), path = %path.display(), "generating enum");

            let file = File::open(&path).map_err(|e| CodegenError::unreadable(&path, e))?;
            let outcome = emit_task(task, BufReader::new(file), &path, sink)?;
            log_outcome(task, &path, outcome);

            summary.reports.push(TaskReport {
                task: task.name().to_string(),
                outcome,
            });
        }

        sink.flush()?;
        Ok(summary)
    }

    /// Runs every task and returns the generated source as a string.
    ///
    /// # Errors
    /// Same as [`Generator::run`].
    pub fn generate_to_string(&self, tasks: &[Task]) -> Result<String, CodegenError> {
        let mut output = Vec::new();
        self.run(tasks, &mut output)?;
        String::from_utf8(output)
            .map_err(|e| CodegenError::generation(format!("output is not UTF-8: {e}")))
    }

    /// Regenerates the output and compares it with a previously generated
    /// file.
    ///
    /// # Errors
    /// Same as [`Generator::run`].
    pub fn is_up_to_date(&self, tasks: &[Task], existing: &str) -> Result<bool, CodegenError> {
        let fresh = self.generate_to_string(tasks)?;
        Ok(fresh == existing)
    }
}

/// Scans one header for a task's block and writes the declaration as it goes.
///
/// `origin` names the header in read errors.
///
/// # Errors
/// Returns `CodegenError::Source` if reading fails and `CodegenError::Io`
/// if writing fails.
pub fn emit_task<R: BufRead, W: Write>(
    task: &Task,
    reader: R,
    origin: &Path,
    sink: &mut W,
) -> Result<TaskOutcome, CodegenError> {
    let generator = EnumGenerator::new(task);
    let mut scanner = BlockScanner::new(task);
    let mut opened = false;
    let mut members = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| CodegenError::unreadable(origin, e))?;
        match scanner.feed(&line) {
            Some(ScanEvent::Begin) => {
                opened = true;
                sink.write_all(generator.generate_open().as_bytes())?;
            }
            Some(ScanEvent::Member(member)) => {
                members += 1;
                sink.write_all(generator.generate_variant(&member).as_bytes())?;
            }
            Some(ScanEvent::End) => {
                sink.write_all(generator.generate_close().as_bytes())?;
                break;
            }
            None => {}
        }
    }

    Ok(if scanner.is_done() {
        TaskOutcome::Emitted { members }
    } else if opened {
        TaskOutcome::Unterminated { members }
    } else {
        TaskOutcome::NotFound
    })
}

fn log_outcome(task: &Task, path: &Path, outcome: TaskOutcome) {
    match outcome {
        TaskOutcome::Emitted { members } => {
            tracing::info!(task = task.name(), members, "enum generated");
        }
        TaskOutcome::NotFound => {
            tracing::warn!(
                task = task.name(),
                path = %path.display(),
                begin = task.begin().as_str(),
                "enum block not found"
            );
        }
        TaskOutcome::Unterminated { members } => {
            tracing::warn!(
                task = task.name(),
                path = %path.display(),
                members,
                "enum block not terminated before end of file"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provenance;
    use enumsync_scan::{CaseRule, Repr};
    use std::fs;
    use tempfile::TempDir;

    const STATISTICS_H: &str = "\
#pragma once

namespace rocksdb {

enum Tickers : uint32_t {
  // total block cache misses
  BLOCK_CACHE_MISS = 0,
  BLOCK_CACHE_HIT,
  // note
  BLOCK_CACHE_ADD = 100,

  GET_HIT_L2_AND_UP,
  TICKER_ENUM_MAX
};

enum Histograms : uint32_t {
  DB_GET = 0,
  DB_WRITE,
  HISTOGRAM_ENUM_MAX,
};

}  // namespace rocksdb
";

    const PERF_FLAG_H: &str = "\
enum PerfFlag : uint32_t {
  user_key_comparison_count = 0,
  block_cache_hit_count,
  COUNT
};
";

    fn create_header_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("statistics.h"), STATISTICS_H).expect("Failed to write");
        fs::write(dir.path().join("perf_flag.h"), PERF_FLAG_H).expect("Failed to write");
        dir
    }

    fn create_generator(dir: &TempDir) -> Generator {
        Generator::new(
            GeneratorConfig::new()
                .header_root(dir.path())
                .provenance(Provenance::new("enumsync", "RocksDB")),
        )
    }

    fn task(name: &str, source: &str, begin: &str) -> Task {
        Task::builder(name, source)
            .begin(begin)
            .build()
            .expect("Failed to build task")
    }

    fn tickers() -> Task {
        task("DBStatisticsTickerType", "statistics.h", r"enum Tickers .* \{")
    }

    fn histograms() -> Task {
        task("DBStatisticsHistogramType", "statistics.h", r"enum Histograms .* \{")
    }

    #[test]
    fn test_run_full_output() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let output = generator
            .generate_to_string(&[tickers(), histograms()])
            .unwrap();

        let expected = "\
/// This file is generated by enumsync.
/// Re-generate it if you upgrade to a new version of RocksDB.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum DBStatisticsTickerType {
    BlockCacheMiss = 0,
    BlockCacheHit = 1,
    BlockCacheAdd = 2,
    GetHitL2AndUp = 3,
}
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum DBStatisticsHistogramType {
    DbGet = 0,
    DbWrite = 1,
    HistogramEnumMax = 2,
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_summary() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let mut sink = Vec::new();
        let summary = generator.run(&[tickers(), histograms()], &mut sink).unwrap();

        assert!(summary.all_emitted());
        assert_eq!(
            summary.outcome("DBStatisticsTickerType"),
            Some(TaskOutcome::Emitted { members: 4 })
        );
        assert_eq!(
            summary.outcome("DBStatisticsHistogramType"),
            Some(TaskOutcome::Emitted { members: 3 })
        );
    }

    #[test]
    fn test_run_is_deterministic() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let tasks = [tickers(), histograms()];
        let first = generator.generate_to_string(&tasks).unwrap();
        let second = generator.generate_to_string(&tasks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_task_order_is_preserved() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let output = generator
            .generate_to_string(&[histograms(), tickers()])
            .unwrap();

        let histograms_at = output.find("pub enum DBStatisticsHistogramType").unwrap();
        let tickers_at = output.find("pub enum DBStatisticsTickerType").unwrap();
        assert!(histograms_at < tickers_at);
        assert!(output[histograms_at..tickers_at].contains("    DbWrite = 1,\n}\n"));
    }

    #[test]
    fn test_missing_block_is_silent() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let missing = task("Missing", "statistics.h", "enum Missing");
        let mut sink = Vec::new();
        let summary = generator
            .run(&[missing, histograms()], &mut sink)
            .unwrap();

        let output = String::from_utf8(sink).unwrap();
        assert!(!output.contains("Missing"));
        assert!(output.contains("pub enum DBStatisticsHistogramType {"));
        assert_eq!(summary.outcome("Missing"), Some(TaskOutcome::NotFound));
        assert!(!summary.all_emitted());

        let alone = generator.generate_to_string(&[histograms()]).unwrap();
        assert_eq!(output, alone);
    }

    #[test]
    fn test_missing_header_aborts_run() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let absent = task("Absent", "absent.h", "enum Absent");
        let mut sink = Vec::new();
        let err = generator
            .run(&[absent, tickers()], &mut sink)
            .unwrap_err();

        match err {
            CodegenError::Source { path, .. } => assert!(path.ends_with("absent.h")),
            other => panic!("unexpected error: {other:?}"),
        }
        let output = String::from_utf8(sink).unwrap();
        assert!(!output.contains("DBStatisticsTickerType"));
    }

    #[test]
    fn test_perf_flag_with_u32_repr() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let perf = Task::builder("PerfFlag", "perf_flag.h")
            .begin(r"enum PerfFlag .* \{")
            .repr(Repr::U32)
            .build()
            .unwrap();
        let output = generator.generate_to_string(&[perf]).unwrap();

        assert!(output.ends_with(
            "#[derive(Copy, Clone, Debug, Eq, PartialEq)]\n\
             #[repr(u32)]\n\
             pub enum PerfFlag {\n    \
             UserKeyComparisonCount = 0,\n    \
             BlockCacheHitCount = 1,\n\
             }\n"
        ));
    }

    #[test]
    fn test_emit_task_scenario() {
        let header = "enum Tickers : uint32_t {\n  DB_GET = 0,\n  DB_WRITE,\n};\n";
        let tickers = task("Tickers", "statistics.h", "enum Tickers");
        let mut sink = Vec::new();
        let outcome = emit_task(&tickers, header.as_bytes(), Path::new("mem"), &mut sink).unwrap();

        assert_eq!(outcome, TaskOutcome::Emitted { members: 2 });
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "#[derive(Copy, Clone, Debug, Eq, PartialEq)]\n\
             #[repr(C)]\n\
             pub enum Tickers {\n    \
             DbGet = 0,\n    \
             DbWrite = 1,\n\
             }\n"
        );
    }

    #[test]
    fn test_emit_task_ordinals_ignore_initializers() {
        let header = "enum E {\n  A = 5,\n  // B,\n  C = 1,\n  D = A + C,\n};\n";
        let e = task("E", "e.h", "enum E");
        let mut sink = Vec::new();
        emit_task(&e, header.as_bytes(), Path::new("mem"), &mut sink).unwrap();
        let output = String::from_utf8(sink).unwrap();

        assert!(output.contains("    A = 0,\n    C = 1,\n    D = 2,\n"));
        assert!(!output.contains("B ="));
    }

    #[test]
    fn test_emit_task_upper_first_rule() {
        let header = "enum E {\n  DB_oPEN,\n};\n";
        let e = Task::builder("E", "e.h")
            .begin("enum E")
            .case_rule(CaseRule::UpperFirst)
            .build()
            .unwrap();
        let mut sink = Vec::new();
        emit_task(&e, header.as_bytes(), Path::new("mem"), &mut sink).unwrap();
        assert!(String::from_utf8(sink).unwrap().contains("    DBOPEN = 0,\n"));
    }

    #[test]
    fn test_emit_task_unterminated() {
        let header = "enum E {\n  A,\n  B,\n";
        let e = task("E", "e.h", "enum E");
        let mut sink = Vec::new();
        let outcome = emit_task(&e, header.as_bytes(), Path::new("mem"), &mut sink).unwrap();

        assert_eq!(outcome, TaskOutcome::Unterminated { members: 2 });
        assert!(!String::from_utf8(sink).unwrap().contains('}'));
    }

    #[test]
    fn test_is_up_to_date() {
        let dir = create_header_dir();
        let generator = create_generator(&dir);
        let tasks = [tickers()];
        let committed = generator.generate_to_string(&tasks).unwrap();
        assert!(generator.is_up_to_date(&tasks, &committed).unwrap());

        let upgraded = STATISTICS_H.replace("  BLOCK_CACHE_HIT,\n", "");
        fs::write(dir.path().join("statistics.h"), upgraded).unwrap();
        assert!(!generator.is_up_to_date(&tasks, &committed).unwrap());
    }
}
