//! Numeric `#define` constant scanning.
//!
//! Only the plain `#define NAME 123` shape is recognized, optionally
//! followed by a comment. Expression macros and function-like macros are
//! left alone.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Constant table: name to literal value, in first-seen order.
pub type Constants = IndexMap<String, String>;

static DEFINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\s*define\s+(\w+)\s+(\d+)\s*(?:/\*|//|$)")
        .expect("define pattern is a valid regex")
});

/// Scans header text for simple numeric macro definitions.
///
/// A later redefinition of a name already seen is ignored.
///
/// # Arguments
/// * `text` - Raw header source
///
/// # Returns
/// Constants in the order they first appear.
#[must_use]
pub fn scan_defines(text: &str) -> Constants {
    let mut constants = Constants::new();

    for line in text.lines() {
        if let Some(caps) = DEFINE_PATTERN.captures(line) {
            constants
                .entry(caps[1].to_string())
                .or_insert_with(|| caps[2].to_string());
        }
    }

    tracing::debug!(count = constants.len(), "scanned numeric defines");
    constants
}
