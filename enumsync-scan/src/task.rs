//! Generation task definitions.
//!
//! A [`Task`] names one output enum and tells the scanner where its source
//! block lives: which header to read, which line opens the block, which line
//! closes it and which lines inside it declare members.

use crate::error::ScanError;
use crate::naming::CaseRule;
use crate::pattern::LinePattern;
use std::fmt;
use std::path::{Path, PathBuf};

/// End pattern matching the `};` that closes a C enum block.
pub const DEFAULT_END_PATTERN: &str = r"\};\s*";

/// Member pattern matching an indented, comma-terminated enumerator line.
pub const DEFAULT_MEMBER_PATTERN: &str = r"\s*\w(_\w)*.*,";

/// Identifies one of the three line patterns of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternRole {
    /// Line that opens the enum block.
    Begin,
    /// Line that closes the enum block.
    End,
    /// Line declaring one enumerator.
    Member,
}

impl fmt::Display for PatternRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Begin => "begin",
            Self::End => "end",
            Self::Member => "member",
        };
        f.write_str(name)
    }
}

/// Representation attribute emitted on the generated enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repr {
    /// `#[repr(C)]`.
    #[default]
    C,
    /// `#[repr(u32)]`.
    U32,
}

impl Repr {
    /// Returns the attribute line for this representation.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::C => "#[repr(C)]",
            Self::U32 => "#[repr(u32)]",
        }
    }
}

/// One unit of generation: a header block turned into one Rust enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    source: PathBuf,
    begin: LinePattern,
    end: LinePattern,
    member: LinePattern,
    case_rule: CaseRule,
    repr: Repr,
}

impl Task {
    /// Starts building a task that emits `name` from the header at `source`.
    ///
    /// `source` is resolved against the generator's header root.
    #[must_use]
    pub fn builder(name: impl Into<String>, source: impl Into<PathBuf>) -> TaskBuilder {
        TaskBuilder::new(name, source)
    }

    /// Name of the generated enum.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header path relative to the header root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Pattern of the line opening the block.
    #[must_use]
    pub fn begin(&self) -> &LinePattern {
        &self.begin
    }

    /// Pattern of the line closing the block.
    #[must_use]
    pub fn end(&self) -> &LinePattern {
        &self.end
    }

    /// Pattern of a member line inside the block.
    #[must_use]
    pub fn member(&self) -> &LinePattern {
        &self.member
    }

    /// Case rule applied to member names.
    #[must_use]
    pub fn case_rule(&self) -> CaseRule {
        self.case_rule
    }

    /// Representation of the generated enum.
    #[must_use]
    pub fn repr(&self) -> Repr {
        self.repr
    }
}

/// Builder for [`Task`].
///
/// Only the begin pattern is required; the end and member patterns default
/// to [`DEFAULT_END_PATTERN`] and [`DEFAULT_MEMBER_PATTERN`].
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    source: PathBuf,
    begin: Option<String>,
    end: String,
    member: String,
    case_rule: CaseRule,
    repr: Repr,
}

impl TaskBuilder {
    /// Creates a new task builder with default patterns.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            begin: None,
            end: DEFAULT_END_PATTERN.to_string(),
            member: DEFAULT_MEMBER_PATTERN.to_string(),
            case_rule: CaseRule::default(),
            repr: Repr::default(),
        }
    }

    /// Sets the begin pattern.
    #[must_use]
    pub fn begin(mut self, pattern: impl Into<String>) -> Self {
        self.begin = Some(pattern.into());
        self
    }

    /// Sets the end pattern.
    #[must_use]
    pub fn end(mut self, pattern: impl Into<String>) -> Self {
        self.end = pattern.into();
        self
    }

    /// Sets the member pattern.
    #[must_use]
    pub fn member(mut self, pattern: impl Into<String>) -> Self {
        self.member = pattern.into();
        self
    }

    /// Sets the member name case rule.
    #[must_use]
    pub fn case_rule(mut self, rule: CaseRule) -> Self {
        self.case_rule = rule;
        self
    }

    /// Sets the enum representation.
    #[must_use]
    pub fn repr(mut self, repr: Repr) -> Self {
        self.repr = repr;
        self
    }

    /// Compiles the patterns and builds the task.
    ///
    /// # Errors
    /// Returns `ScanError::MissingPattern` if no begin pattern was set and
    /// `ScanError::Pattern` if any pattern fails to compile.
    pub fn build(self) -> Result<Task, ScanError> {
        let begin = self
            .begin
            .as_deref()
            .ok_or_else(|| ScanError::missing_pattern(&self.name, PatternRole::Begin))?;

        let compile = |pattern: &str, role| {
            LinePattern::new(pattern).map_err(|e| ScanError::pattern(&self.name, role, e))
        };
        let begin = compile(begin, PatternRole::Begin)?;
        let end = compile(&self.end, PatternRole::End)?;
        let member = compile(&self.member, PatternRole::Member)?;

        Ok(Task {
            name: self.name,
            source: self.source,
            begin,
            end,
            member,
            case_rule: self.case_rule,
            repr: self.repr,
        })
    }
}
