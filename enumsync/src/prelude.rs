//! Prelude module for convenient imports.
//!
//! ```ignore
//! use enumsync::prelude::*;
//! ```

// Scan types
pub use enumsync_scan::{CaseRule, EnumMember, LinePattern, Repr, ScanError, Task, TaskBuilder};

// Codegen types
pub use enumsync_codegen::{
    CodegenError, Generator, GeneratorConfig, Provenance, RunSummary, TaskOutcome,
};
