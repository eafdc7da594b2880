//! Error types for task definition.

use crate::task::PatternRole;
use thiserror::Error;

/// Error type for building scan tasks.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A line pattern failed to compile.
    #[error("invalid {role} pattern for task '{task}': {source}")]
    Pattern {
        /// Task name.
        task: String,
        /// Which of the task's patterns failed.
        role: PatternRole,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// A required pattern was never set.
    #[error("task '{task}' has no {role} pattern")]
    MissingPattern {
        /// Task name.
        task: String,
        /// The missing pattern.
        role: PatternRole,
    },
}

impl ScanError {
    /// Creates a pattern compilation error.
    pub fn pattern(task: impl Into<String>, role: PatternRole, source: regex::Error) -> Self {
        Self::Pattern {
            task: task.into(),
            role,
            source,
        }
    }

    /// Creates a missing pattern error.
    pub fn missing_pattern(task: impl Into<String>, role: PatternRole) -> Self {
        Self::MissingPattern {
            task: task.into(),
            role,
        }
    }
}
