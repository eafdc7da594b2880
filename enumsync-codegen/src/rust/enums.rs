//! Enum declaration code generation.

use crate::config::Provenance;
use enumsync_scan::{EnumMember, Task, transform_name};

/// Derive line marking the enum as a plain value type.
pub const VALUE_TYPE_DERIVE: &str = "#[derive(Copy, Clone, Debug, Eq, PartialEq)]";

/// Generates the provenance comment that opens the output.
#[must_use]
pub fn generate_provenance(provenance: &Provenance) -> String {
    format!(
        "/// This file is generated by {}.\n\
         /// Re-generate it if you upgrade to a new version of {}.\n\n",
        provenance.tool, provenance.upstream
    )
}

/// Generator for the pieces of one enum declaration.
///
/// The pieces are produced separately so the caller can write them to its
/// sink as the header is scanned.
pub struct EnumGenerator<'a> {
    task: &'a Task,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator for a task.
    #[must_use]
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    /// Generates the attributes and the opening line.
    #[must_use]
    pub fn generate_open(&self) -> String {
        let mut output = String::new();
        output.push_str(VALUE_TYPE_DERIVE);
        output.push('\n');
        output.push_str(self.task.repr().attribute());
        output.push('\n');
        output.push_str(&format!("pub enum {} {{\n", self.task.name()));
        output
    }

    /// Generates one variant line.
    #[must_use]
    pub fn generate_variant(&self, member: &EnumMember) -> String {
        let name = transform_name(&member.name, self.task.case_rule());
        format!("    {} = {},\n", name, member.ordinal)
    }

    /// Generates the closing line.
    #[must_use]
    pub fn generate_close(&self) -> String {
        "}\n".to_string()
    }

    /// Generates a complete declaration from already extracted members.
    #[must_use]
    pub fn generate(&self, members: &[EnumMember]) -> String {
        let mut output = self.generate_open();
        for member in members {
            output.push_str(&self.generate_variant(member));
        }
        output.push_str(&self.generate_close());
        output
    }
}
