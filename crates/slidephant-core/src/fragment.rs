//! Fragment codec for the navigation position.
//!
//! The fragment is the terminal analogue of a URL hash: `#<1-based-index>`
//! or `#<1-based-index>/<total-count>`. It is written to the terminal title
//! on every render, and parsed on startup and from the go-to prompt.

use std::fmt;

/// A formatted navigation position: 1-based slide number plus total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    slide_number: usize,
    total: usize,
}

impl Fragment {
    /// Builds a fragment from a zero-based slide index and the deck length.
    pub fn new(zero_based: usize, total: usize) -> Self {
        Self {
            slide_number: zero_based + 1,
            total,
        }
    }

}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}/{}", self.slide_number, self.total)
    }
}

/// Parses the 1-based slide number from a raw fragment string.
///
/// Parsing is lenient, matching how address bars treat hashes: a leading `#`
/// is optional, anything after the first `/` is ignored, surrounding
/// whitespace is ignored, and trailing garbage after the digits is dropped
/// (`"2abc"` parses as 2). Returns `None` when no number can be extracted.
pub fn parse_slide_number(raw: &str) -> Option<i64> {
    let head = raw.trim().trim_start_matches('#');
    let head = head.split('/').next().unwrap_or("").trim();
    let (sign, digits) = match head.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, head.strip_prefix('+').unwrap_or(head)),
    };
    let leading: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if leading.is_empty() {
        return None;
    }
    leading.parse::<i64>().ok().map(|n| sign * n)
}

/// Resolves a raw fragment against a deck length.
///
/// Returns a zero-based index: numbers strictly within `[1, len]` map to
/// `n - 1`; everything else (missing, malformed, zero, negative, or larger
/// than the deck) resolves to slide 0. Never an error.
pub fn resolve(raw: &str, len: usize) -> usize {
    match parse_slide_number(raw) {
        Some(n) if n > 0 && (n as usize) <= len => (n as usize) - 1,
        _ => 0,
    }
}
