//! Generator configuration.

use std::path::{Path, PathBuf};

/// Provenance comment written once at the top of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Name of the generating tool.
    pub tool: String,
    /// Name of the upstream library whose upgrade requires regeneration.
    pub upstream: String,
}

impl Provenance {
    /// Creates a provenance notice.
    #[must_use]
    pub fn new(tool: impl Into<String>, upstream: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            upstream: upstream.into(),
        }
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::new("enumsync", "the upstream library")
    }
}

/// Settings shared by every task of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    header_root: PathBuf,
    provenance: Provenance,
}

impl GeneratorConfig {
    /// Creates a configuration reading headers from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header_root: PathBuf::from("."),
            provenance: Provenance::default(),
        }
    }

    /// Sets the directory task sources are resolved against.
    #[must_use]
    pub fn header_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.header_root = root.into();
        self
    }

    /// Sets the provenance notice.
    #[must_use]
    pub fn provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Resolves a task source path against the header root.
    #[must_use]
    pub fn resolve(&self, source: &Path) -> PathBuf {
        self.header_root.join(source)
    }

    /// Returns the provenance notice.
    #[must_use]
    pub fn provenance_notice(&self) -> &Provenance {
        &self.provenance
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
