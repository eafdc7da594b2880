//! Enumerator name transformation.
//!
//! Header enumerators are underscore-delimited (`BLOCK_CACHE_MISS`,
//! `user_key_comparison_count`). Each token has its case adjusted and the
//! tokens are joined without a separator.

/// Per-token case rule applied when converting an enumerator name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseRule {
    /// Upper-case the first character, lower-case the rest.
    ///
    /// `BLOCK_CACHE_MISS` becomes `BlockCacheMiss`.
    #[default]
    Capitalize,
    /// Upper-case the first character, keep the rest as written.
    ///
    /// `BLOCK_CACHE_MISS` becomes `BLOCKCACHEMISS`.
    UpperFirst,
}

impl CaseRule {
    /// Applies the rule to a single token.
    #[must_use]
    pub fn apply(self, token: &str) -> String {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        let mut result = String::with_capacity(token.len());
        result.push(first.to_ascii_uppercase());
        match self {
            Self::Capitalize => result.extend(chars.map(|c| c.to_ascii_lowercase())),
            Self::UpperFirst => result.extend(chars),
        }
        result
    }
}

/// Converts a raw enumerator name into a Rust variant name.
///
/// Empty tokens (from leading, trailing or doubled underscores) contribute
/// nothing.
#[must_use]
pub fn transform_name(raw: &str, rule: CaseRule) -> String {
    raw.split('_').map(|token| rule.apply(token)).collect()
}
