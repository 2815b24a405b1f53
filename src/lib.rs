//! 'placeholder-vars' - Detects `{{ variable }}` placeholders in free text.
//!
//! The core is a single, total operation: [`extract_variables`] scans a
//! string for placeholders written as `{{ name }}` (one space of padding on
//! each side, ASCII word characters only) and returns the variable names in
//! order of appearance. Malformed placeholders are skipped, never reported.
//!
//! [`hook::InputChangeHook`] connects the extractor to a host text field:
//! every change event runs one extraction and forwards the result.

pub mod extract;
pub mod hook;

pub use extract::{
    Padding, Placeholder, PlaceholderExtractor, PlaceholderSyntax, SyntaxError, VariableExtractor,
};
pub use hook::{InputChangeHook, VariableSink};

use std::collections::HashSet;
use std::sync::LazyLock;

// Shared so repeated calls reuse the regex's search cache
static DEFAULT_EXTRACTOR: LazyLock<PlaceholderExtractor> = LazyLock::new(PlaceholderExtractor::new);

/// Extracts variable names from `{{ name }}` placeholders in `input`.
///
/// Names come back left to right with duplicates preserved. An input without
/// placeholders, including the empty string, yields an empty vector.
///
/// For custom delimiters or padding, see [`extract::PlaceholderExtractor`].
pub fn extract_variables(input: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(input)
}

/// Locates every `{{ name }}` placeholder in `input`.
pub fn find_placeholders(input: &str) -> Vec<Placeholder<'_>> {
    DEFAULT_EXTRACTOR.find_all(input)
}

/// Like [`extract_variables`], keeping only the first occurrence of each name.
pub fn unique_variables(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_variables(input)
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
