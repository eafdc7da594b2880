//! # enumsync Scan
//!
//! Line-oriented scanner for enumerator blocks in C/C++ headers.
//!
//! This crate provides:
//! - Task definitions with begin/end/member line patterns
//! - A three-state block scanner (seeking, collecting, done)
//! - Member name extraction and case transformation

pub mod error;
pub mod naming;
pub mod pattern;
pub mod scanner;
pub mod task;

pub use error::ScanError;
pub use naming::{CaseRule, transform_name};
pub use pattern::LinePattern;
pub use scanner::{
    BlockScanner, EnumMember, ScanEvent, ScanState, ScannedBlock, member_name, scan_str,
};
pub use task::{PatternRole, Repr, Task, TaskBuilder};
