//! Front-end contract between language parsers and the analyzer.

use crate::decl::SourceTree;
use thiserror::Error;

/// Errors a language front-end can produce.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text is not syntactically valid.
    #[error("syntax error near line {line}")]
    Syntax {
        /// 1-based line of the first offending node.
        line: usize,
    },

    /// The grammar could not be loaded into the parser.
    #[error("grammar unavailable: {0}")]
    Grammar(String),
}

/// A language front-end that turns source text into a declaration graph.
///
/// Implement this trait to add a language. The front-end owns all
/// parser-specific detail; the analyzer only consumes the resulting
/// [`SourceTree`] or the typed failure.
///
/// # Example
///
/// ```ignore
/// use solid_lint_core::{ParseError, SourceParser, SourceTree};
///
/// pub struct JavaExtractor { /* grammar handle */ }
///
/// impl SourceParser for JavaExtractor {
///     fn language_id(&self) -> &'static str { "java" }
///     fn extensions(&self) -> &'static [&'static str] { &[".java"] }
///
///     fn parse(&self, source: &str) -> Result<SourceTree, ParseError> {
///         // walk the grammar's tree into Declarations
///     }
/// }
/// ```
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"java"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this front-end handles (e.g., `&[".java"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source text into a declaration graph.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] when the source is not valid in this
    /// language, or [`ParseError::Grammar`] when the grammar itself cannot
    /// be used. An empty or declaration-free source is not an error.
    fn parse(&self, source: &str) -> Result<SourceTree, ParseError>;
}

/// Type alias for boxed parser trait objects.
pub type ParserBox = Box<dyn SourceParser>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_names_the_line() {
        let err = ParseError::Syntax { line: 7 };
        assert_eq!(err.to_string(), "syntax error near line 7");
    }

    #[test]
    fn grammar_error_carries_detail() {
        let err = ParseError::Grammar("version mismatch".to_string());
        assert_eq!(err.to_string(), "grammar unavailable: version mismatch");
    }
}
