//! Enum block scanner.
//!
//! The scanner is fed one header line at a time and walks three states:
//!
//! - [`ScanState::Seeking`]: looking for the line matching the begin pattern.
//! - [`ScanState::Collecting`]: inside the block; the end pattern is tested
//!   first, then the member pattern. Lines matching neither are skipped.
//! - [`ScanState::Done`]: the end line was seen; every further line is ignored.
//!
//! Ordinals come from the encounter order of member lines, never from any
//! initializer written in the header.

use crate::task::Task;

/// One extracted enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Identifier as written in the header (`BLOCK_CACHE_MISS`).
    pub name: String,
    /// Zero-based position among the block's members.
    pub ordinal: u32,
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Looking for the begin line.
    #[default]
    Seeking,
    /// Inside the block.
    Collecting {
        /// Ordinal assigned to the next member.
        next_ordinal: u32,
    },
    /// Block closed.
    Done,
}

/// What a fed line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The line opened the block.
    Begin,
    /// The line declared a member.
    Member(EnumMember),
    /// The line closed the block.
    End,
}

/// Line-by-line state machine for one task.
#[derive(Debug)]
pub struct BlockScanner<'a> {
    task: &'a Task,
    state: ScanState,
}

impl<'a> BlockScanner<'a> {
    /// Creates a scanner in the seeking state.
    #[must_use]
    pub fn new(task: &'a Task) -> Self {
        Self {
            task,
            state: ScanState::Seeking,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Returns true once the end line has been seen.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == ScanState::Done
    }

    /// Classifies the next line of the header.
    ///
    /// Returns `None` for lines that are skipped.
    pub fn feed(&mut self, line: &str) -> Option<ScanEvent> {
        match self.state {
            ScanState::Seeking => {
                if !self.task.begin().matches(line) {
                    return None;
                }
                tracing::trace!(task = self.task.name(), "block opened");
                self.state = ScanState::Collecting { next_ordinal: 0 };
                Some(ScanEvent::Begin)
            }
            ScanState::Collecting { next_ordinal } => {
                if self.task.end().matches(line) {
                    tracing::trace!(
                        task = self.task.name(),
                        members = next_ordinal,
                        "block closed"
                    );
                    self.state = ScanState::Done;
                    return Some(ScanEvent::End);
                }
                if !self.task.member().matches(line) {
                    return None;
                }
                self.state = ScanState::Collecting {
                    next_ordinal: next_ordinal + 1,
                };
                Some(ScanEvent::Member(EnumMember {
                    name: member_name(line).to_string(),
                    ordinal: next_ordinal,
                }))
            }
            ScanState::Done => None,
        }
    }
}

/// Extracts the declared identifier from a member line.
///
/// Takes the text before the first `,`, then before the first `=`, and trims
/// it, so `  DB_GET = 0x10, // comment` yields `DB_GET`.
#[must_use]
pub fn member_name(line: &str) -> &str {
    let declaration = line.split(',').next().unwrap_or_default();
    declaration.split('=').next().unwrap_or_default().trim()
}

/// Result of scanning a whole text for one task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannedBlock {
    /// Members in encounter order.
    pub members: Vec<EnumMember>,
    /// Whether the end line was found.
    pub terminated: bool,
}

/// Scans in-memory header text for the task's block.
///
/// Returns `None` if the begin pattern never matches.
#[must_use]
pub fn scan_str(task: &Task, text: &str) -> Option<ScannedBlock> {
    let mut scanner = BlockScanner::new(task);
    let mut block: Option<ScannedBlock> = None;

    for line in text.lines() {
        match scanner.feed(line) {
            Some(ScanEvent::Begin) => block = Some(ScannedBlock::default()),
            Some(ScanEvent::Member(member)) => {
                if let Some(block) = block.as_mut() {
                    block.members.push(member);
                }
            }
            Some(ScanEvent::End) => {
                if let Some(block) = block.as_mut() {
                    block.terminated = true;
                }
                break;
            }
            None => {}
        }
    }

    block
}
