use super::core::{PlaceholderSyntax, VariableExtractor};
use super::error::SyntaxError;
use log::debug;
use regex::{CaptureMatches, Regex};
use std::ops::Range;
use std::sync::LazyLock;

static DEFAULT_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // {{ name }} with exactly one space inside each pair of braces
    Regex::new(r"\{\{ (?P<name>[A-Za-z0-9_]+) \}\}").unwrap()
});

/// A placeholder occurrence borrowed from the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'t> {
    matched: &'t str,
    name: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Placeholder<'t> {
    /// The variable name inside the delimiters
    pub fn name(&self) -> &'t str {
        self.name
    }

    /// The full matched text, delimiters included
    pub fn as_str(&self) -> &'t str {
        self.matched
    }

    /// Byte offset where the match starts
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Placeholder extractor backed by a compiled [`PlaceholderSyntax`]
#[derive(Debug, Clone)]
pub struct PlaceholderExtractor {
    regex: Regex,
    syntax: PlaceholderSyntax,
    debug_mode: bool,
}

impl PlaceholderExtractor {
    /// Extractor for the standard `{{ name }}` syntax
    pub fn new() -> Self {
        Self {
            regex: DEFAULT_PLACEHOLDER_RE.clone(),
            syntax: PlaceholderSyntax::default(),
            debug_mode: false,
        }
    }

    /// Extractor for a custom syntax
    pub fn with_syntax(syntax: PlaceholderSyntax) -> Result<Self, SyntaxError> {
        let regex = syntax.compile()?;
        Ok(Self {
            regex,
            syntax,
            debug_mode: false,
        })
    }

    pub fn with_debug(mut self) -> Self {
        self.debug_mode = true;
        self
    }

    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }

    /// Iterate over placeholders left to right. Matches never overlap.
    pub fn find_iter<'e, 't>(&'e self, text: &'t str) -> Placeholders<'e, 't> {
        Placeholders {
            captures: self.regex.captures_iter(text),
            regex: &self.regex,
            syntax: &self.syntax,
            text,
            prev_end: None,
        }
    }

    /// Collect every placeholder in `text`
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Placeholder<'t>> {
        self.find_iter(text).collect()
    }

    /// Extract variable names in order of appearance, duplicates kept.
    ///
    /// Never fails: malformed placeholders are skipped and an input without
    /// placeholders yields an empty vector.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let variables: Vec<String> = self
            .find_iter(text)
            .map(|placeholder| placeholder.name().to_string())
            .collect();

        if self.debug_mode {
            debug!(
                "Extracted {} variable(s) from {} byte(s) of text: {:?}",
                variables.len(),
                text.len(),
                variables
            );
        }

        variables
    }

    pub fn contains_placeholder(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }
}

impl Default for PlaceholderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableExtractor for PlaceholderExtractor {
    fn extract_variables(&self, text: &str) -> Vec<String> {
        self.extract(text)
    }
}

/// Iterator over the placeholders of a text, see [`PlaceholderExtractor::find_iter`]
pub struct Placeholders<'e, 't> {
    captures: CaptureMatches<'e, 't>,
    regex: &'e Regex,
    syntax: &'e PlaceholderSyntax,
    text: &'t str,
    // end of the previous regex candidate, accepted or not
    prev_end: Option<usize>,
}

impl<'t> Iterator for Placeholders<'_, 't> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        for captures in self.captures.by_ref() {
            let (Some(whole), Some(name)) = (captures.get(0), captures.name("name")) else {
                continue;
            };

            let (start, end) = (whole.start(), whole.end());
            let follows_match = self.prev_end == Some(start);
            self.prev_end = Some(end);

            let (regex, text) = (self.regex, self.text);
            let match_follows = || {
                regex
                    .find_at(text, end)
                    .is_some_and(|next| next.start() == end)
            };
            if !self
                .syntax
                .has_clean_boundaries(text, start, end, follows_match, match_follows)
            {
                continue;
            }

            return Some(Placeholder {
                matched: whole.as_str(),
                name: name.as_str(),
                start,
                end,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Padding;

    #[test]
    fn test_default_regex_matches_default_syntax() {
        let pattern = PlaceholderSyntax::default().to_pattern().unwrap();
        assert_eq!(DEFAULT_PLACEHOLDER_RE.as_str(), pattern);
    }

    #[test]
    fn test_extract_single() {
        let extractor = PlaceholderExtractor::new();
        assert_eq!(extractor.extract("{{ name }}"), vec!["name"]);
    }

    #[test]
    fn test_extract_in_order_with_duplicates() {
        let extractor = PlaceholderExtractor::new();

        let result = extractor.extract("Hello {{ first }} {{ last }}!");
        assert_eq!(result, vec!["first", "last"]);

        let result = extractor.extract("{{ a }} {{ a }}");
        assert_eq!(result, vec!["a", "a"]);
    }

    #[test]
    fn test_malformed_placeholders_are_skipped() {
        let extractor = PlaceholderExtractor::new();

        assert!(extractor.extract("{{name}}").is_empty());
        assert!(extractor.extract("{{ first name }}").is_empty());
        assert!(extractor.extract("{{  padded  }}").is_empty());
        assert!(extractor.extract("{{{ x }}}").is_empty());
        assert!(extractor.extract("{{ x }").is_empty());
        assert!(extractor.extract("{{ }}").is_empty());
        assert!(extractor.extract("{{ café }}").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_case_is_preserved() {
        let extractor = PlaceholderExtractor::new();
        let result = extractor.extract("{{ UserName }} {{ user_id_2 }}");
        assert_eq!(result, vec!["UserName", "user_id_2"]);
    }

    #[test]
    fn test_adjacent_placeholders() {
        let extractor = PlaceholderExtractor::new();
        let result = extractor.extract("{{ a }}{{ b }}");
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_stray_brace_does_not_hide_later_matches() {
        let extractor = PlaceholderExtractor::new();
        let result = extractor.extract("{{{ skip }}} then {{ keep }}");
        assert_eq!(result, vec!["keep"]);
    }

    #[test]
    fn test_find_all_reports_ranges() {
        let extractor = PlaceholderExtractor::new();
        let text = "Dear {{ name }}, é {{ city }}";
        let found = extractor.find_all(text);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name(), "name");
        assert_eq!(found[0].as_str(), "{{ name }}");
        assert_eq!(found[0].range(), 5..15);
        assert_eq!(&text[found[1].range()], "{{ city }}");
        assert_eq!(found[1].name(), "city");
    }

    #[test]
    fn test_contains_placeholder() {
        let extractor = PlaceholderExtractor::new();
        assert!(extractor.contains_placeholder("x {{ y }} z"));
        assert!(!extractor.contains_placeholder("x {{y}} z"));
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = PlaceholderSyntax::default()
            .with_delimiters("<%", "%>")
            .with_padding(Padding::Flexible);
        let extractor = PlaceholderExtractor::with_syntax(syntax).unwrap();

        let result = extractor.extract("<%a%> <% b %> <%\tc  %> {{ d }}");
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_touching_placeholders_with_symmetric_delimiters() {
        let syntax = PlaceholderSyntax::default().with_delimiters("%%", "%%");
        let extractor = PlaceholderExtractor::with_syntax(syntax).unwrap();

        assert_eq!(extractor.extract("%% a %%%% b %%"), vec!["a", "b"]);
        assert_eq!(extractor.extract("%% a %% %% b %%"), vec!["a", "b"]);
        assert_eq!(extractor.extract("%% a %%%%%% b %%"), Vec::<String>::new());

        let syntax = PlaceholderSyntax::default()
            .with_delimiters("|", "|")
            .with_padding(Padding::None);
        let extractor = PlaceholderExtractor::with_syntax(syntax).unwrap();
        assert_eq!(extractor.extract("|x||y||z|"), vec!["x", "y", "z"]);
        assert_eq!(extractor.extract("||x||"), Vec::<String>::new());
    }

    #[test]
    fn test_relaxed_boundaries() {
        let syntax = PlaceholderSyntax::default().allow_adjacent_delimiters();
        let extractor = PlaceholderExtractor::with_syntax(syntax).unwrap();
        assert_eq!(extractor.extract("{{{ x }}}"), vec!["x"]);
    }

    #[test]
    fn test_with_syntax_propagates_errors() {
        let syntax = PlaceholderSyntax::default().with_delimiters("", "}}");
        let result = PlaceholderExtractor::with_syntax(syntax);
        assert!(matches!(
            result,
            Err(SyntaxError::EmptyDelimiter { which: "opening" })
        ));
    }

    #[test]
    fn test_trait_object() {
        let extractor: Box<dyn VariableExtractor> = Box::new(PlaceholderExtractor::new().with_debug());
        assert_eq!(extractor.extract_variables("{{ x }}"), vec!["x"]);
    }
}
