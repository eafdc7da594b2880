//! # enumsync
//!
//! Keeps a binding layer's Rust enums in sync with the enumerator blocks of
//! an upstream C/C++ header.
//!
//! Each [`Task`](scan::Task) names a header, the lines that open and close an
//! `enum` block, and the lines inside it that declare members. The generator
//! scans the header, numbers the members by position and emits a
//! `#[repr(C)]` Rust enum.
//!
//! ## Quick Start
//!
//! ```ignore
//! use enumsync::prelude::*;
//!
//! let tasks = enumsync::tasks::rocksdb_tasks()?;
//! let generator = Generator::new(enumsync::tasks::rocksdb_config());
//! generator.run(&tasks, &mut std::io::stdout().lock())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`scan`] - Tasks, line patterns, block scanner, name transform
//! - [`codegen`] - Enum emission and the generation run
//! - [`tasks`] - Built-in RocksDB task table

pub mod prelude;
pub mod tasks;

/// Tasks, line patterns and the block scanner.
pub mod scan {
    pub use enumsync_scan::*;
}

/// Enum emission and the generation run.
pub mod codegen {
    pub use enumsync_codegen::*;
}

// Re-export commonly used items at the crate root
pub use enumsync_codegen::{CodegenError, Generator, GeneratorConfig, RunSummary};
pub use enumsync_scan::{ScanError, Task};
