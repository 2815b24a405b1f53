use super::error::SyntaxError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Trait for pulling variable names out of free text
pub trait VariableExtractor {
    /// Extract variable names in order of appearance, duplicates kept
    fn extract_variables(&self, text: &str) -> Vec<String>;
}

/// Whitespace allowed between the delimiters and the variable name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Exactly one space on each side: `{{ name }}`
    #[default]
    Single,

    /// No whitespace at all: `{{name}}`
    None,

    /// Any run of spaces or tabs on each side, including none
    Flexible,
}

impl Padding {
    fn pattern(self) -> &'static str {
        match self {
            Padding::Single => " ",
            Padding::None => "",
            Padding::Flexible => "[ \\t]*",
        }
    }
}

/// Configuration for placeholder detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderSyntax {
    /// Opening delimiter, e.g. `{{`
    pub open: String,

    /// Closing delimiter, e.g. `}}`
    pub close: String,

    /// Padding between delimiters and the name
    pub padding: Padding,

    /// Reject candidates glued to a stray delimiter character, as in `{{{ x }}}`
    pub strict_boundaries: bool,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
            padding: Padding::Single,
            strict_boundaries: true,
        }
    }
}

impl PlaceholderSyntax {
    /// Use custom delimiters
    pub fn with_delimiters(mut self, open: &str, close: &str) -> Self {
        self.open = open.to_string();
        self.close = close.to_string();
        self
    }

    /// Set padding rule
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Accept candidates even when an extra delimiter character touches them
    pub fn allow_adjacent_delimiters(mut self) -> Self {
        self.strict_boundaries = false;
        self
    }

    /// Build the regex source for this syntax.
    ///
    /// The name is always captured by the `name` group, so the padding rule
    /// never affects how the identifier is sliced out of a match.
    pub fn to_pattern(&self) -> Result<String, SyntaxError> {
        if self.open.is_empty() {
            return Err(SyntaxError::EmptyDelimiter { which: "opening" });
        }
        if self.close.is_empty() {
            return Err(SyntaxError::EmptyDelimiter { which: "closing" });
        }

        let pad = self.padding.pattern();
        Ok(format!(
            r"{open}{pad}(?P<name>[A-Za-z0-9_]+){pad}{close}",
            open = regex::escape(&self.open),
            close = regex::escape(&self.close),
        ))
    }

    /// Compile this syntax into a regex
    pub fn compile(&self) -> Result<Regex, SyntaxError> {
        Ok(Regex::new(&self.to_pattern()?)?)
    }

    /// Whether a match spanning `start..end` of `text` is clear of stray
    /// delimiter characters on both sides.
    ///
    /// A neighbouring placeholder is not a stray character: `follows_match`
    /// says another candidate ends exactly at `start`, and `match_follows`
    /// is asked only when the character after `end` looks glued.
    pub(crate) fn has_clean_boundaries(
        &self,
        text: &str,
        start: usize,
        end: usize,
        follows_match: bool,
        match_follows: impl FnOnce() -> bool,
    ) -> bool {
        if !self.strict_boundaries {
            return true;
        }

        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        let glued_before =
            !follows_match && before.is_some() && before == self.open.chars().next_back();
        let glued_after = after.is_some() && after == self.close.chars().next();

        !glued_before && !(glued_after && !match_follows())
    }
}
