/// Placeholder syntax errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("The {which} delimiter must not be empty")]
    EmptyDelimiter { which: &'static str },

    #[error("Failed to compile placeholder pattern: {0}")]
    InvalidPattern(String),
}

impl From<regex::Error> for SyntaxError {
    fn from(err: regex::Error) -> Self {
        SyntaxError::InvalidPattern(err.to_string())
    }
}
