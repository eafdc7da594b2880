//! Line predicates used to locate and read an enum block.

use regex::Regex;

/// A regular expression tested against the start of a single line.
///
/// Matching is anchored at the first character but the line does not have
/// to be consumed completely, so `enum Tickers .* \{` matches
/// `enum Tickers : uint32_t {  // trailing`.
#[derive(Debug, Clone)]
pub struct LinePattern {
    source: String,
    regex: Regex,
}

impl LinePattern {
    /// Compiles a line pattern.
    ///
    /// # Errors
    /// Returns the regex error if `pattern` is not a valid expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns true if the pattern matches at the start of `line`.
    #[inline]
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Returns the pattern as written, without the anchor.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for LinePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for LinePattern {}
