//! Placeholder detection for free text.
//!
//! Finds `{{ name }}` placeholders and returns the variable names they
//! reference, in order of appearance.
//!
//! # Examples
//!
//! ## Extract variable names
//!
//! ```rust
//! use placeholder_vars::extract::PlaceholderExtractor;
//!
//! let extractor = PlaceholderExtractor::new();
//! let names = extractor.extract("Hello {{ first }} {{ last }}!");
//! assert_eq!(names, vec!["first", "last"]);
//!
//! // Malformed placeholders are ignored, not reported
//! assert!(extractor.extract("{{name}} and {{ first name }}").is_empty());
//! ```
//!
//! ## Locate placeholders
//!
//! ```rust
//! use placeholder_vars::extract::PlaceholderExtractor;
//!
//! let text = "Dear {{ name }},";
//! let extractor = PlaceholderExtractor::new();
//! let found = extractor.find_all(text);
//! assert_eq!(found[0].name(), "name");
//! assert_eq!(&text[found[0].range()], "{{ name }}");
//! ```
//!
//! ## Custom syntax
//!
//! ```rust
//! use placeholder_vars::extract::{Padding, PlaceholderExtractor, PlaceholderSyntax};
//!
//! let syntax = PlaceholderSyntax::default().with_padding(Padding::Flexible);
//! let extractor = PlaceholderExtractor::with_syntax(syntax).unwrap();
//! assert_eq!(extractor.extract("{{a}} {{  b }}"), vec!["a", "b"]);
//! ```

pub mod core;
pub mod error;
pub mod extractors;

pub use self::core::{Padding, PlaceholderSyntax, VariableExtractor};
pub use self::error::SyntaxError;
pub use self::extractors::{Placeholder, PlaceholderExtractor, Placeholders};
