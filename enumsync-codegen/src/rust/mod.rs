//! Rust code generation modules.

pub mod enums;

pub use enums::{EnumGenerator, generate_provenance};
