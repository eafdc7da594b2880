//! # enumsync Codegen
//!
//! Rust enum generation from enumerator blocks in C/C++ headers.
//!
//! This crate provides:
//! - Rust enum declarations with `#[repr]` and value-type derives
//! - Ordinals assigned by member position
//! - An ordered multi-task run writing to any `std::io::Write` sink
//! - Drift detection against a previously generated file

pub mod config;
pub mod error;
pub mod generator;
pub mod rust;

pub use config::{GeneratorConfig, Provenance};
pub use error::CodegenError;
pub use generator::{Generator, RunSummary, TaskOutcome, TaskReport, emit_task};

use enumsync_scan::Task;
use std::path::Path;

/// Generates the declaration for one task from in-memory header text.
///
/// No provenance comment is written. Returns an empty string if the task's
/// block is not found.
///
/// # Arguments
/// * `task` - Task describing the block
/// * `header` - Header content
///
/// # Errors
/// Returns `CodegenError` if the output cannot be assembled.
pub fn generate_from_str(task: &Task, header: &str) -> Result<String, CodegenError> {
    let mut output = Vec::new();
    emit_task(task, header.as_bytes(), Path::new("<memory>"), &mut output)?;
    String::from_utf8(output)
        .map_err(|e| CodegenError::generation(format!("output is not UTF-8: {e}")))
}
