//! Error types for JSON parsing.

use std::fmt;
use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Where in the input an error was detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Byte offset of the cursor.
    pub offset: usize,
    /// One-based line number.
    pub line: usize,
    /// One-based column, counted in characters.
    pub column: usize,
    /// Name of the document, if one was configured.
    pub filename: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " at {}:{}", self.line, self.column)?;
        if let Some(name) = &self.filename {
            write!(f, " of <{}>", name)?;
        }
        Ok(())
    }
}

/// Error type for JSON parsing.
///
/// Parsing stops at the first error; no partial value is ever returned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed structural token: wrong delimiter, bad keyword, missing separator.
    #[error("{message}{location}")]
    Syntax { message: String, location: Location },

    /// Input ended while more characters were required.
    #[error("Unexpected end of input, expected {expected}{location}")]
    EndOfInput {
        expected: &'static str,
        location: Location,
    },

    /// Nesting went past the configured `max_depth`.
    #[error("Nesting deeper than {limit} levels{location}")]
    NestingTooDeep { limit: usize, location: Location },
}

impl ParseError {
    /// Position at which the error was raised.
    pub fn location(&self) -> &Location {
        match self {
            ParseError::Syntax { location, .. }
            | ParseError::EndOfInput { location, .. }
            | ParseError::NestingTooDeep { location, .. } => location,
        }
    }

    /// Returns `true` for [`ParseError::Syntax`].
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    /// Returns `true` for [`ParseError::EndOfInput`].
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ParseError::EndOfInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(filename: Option<&str>) -> Location {
        Location {
            offset: 4,
            line: 1,
            column: 5,
            filename: filename.map(String::from),
        }
    }

    #[test]
    fn test_syntax_message() {
        let err = ParseError::Syntax {
            message: "Expected ':'".into(),
            location: loc(None),
        };
        assert_eq!(err.to_string(), "Expected ':' at 1:5");
        assert!(err.is_syntax());
    }

    #[test]
    fn test_filename_suffix() {
        let err = ParseError::EndOfInput {
            expected: "a value",
            location: loc(Some("doc.json")),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected end of input, expected a value at 1:5 of <doc.json>"
        );
        assert!(err.is_end_of_input());
        assert_eq!(err.location().offset, 4);
    }
}
