//! Parser configuration.

/// Knobs for a single parse.
///
/// The defaults reproduce the plain recursive-descent behavior: unbounded
/// nesting, no filename, and anything after the first value is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Document name reported in error locations.
    pub filename: Option<String>,
    /// Maximum nesting of objects and arrays. `None` leaves nesting bounded
    /// only by the native stack.
    pub max_depth: Option<usize>,
    /// Fail when anything other than whitespace follows the parsed value.
    pub reject_trailing_content: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn reject_trailing_content(mut self, reject: bool) -> Self {
        self.reject_trailing_content = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lenient() {
        let opts = ParseOptions::default();
        assert_eq!(opts.filename, None);
        assert_eq!(opts.max_depth, None);
        assert!(!opts.reject_trailing_content);
    }

    #[test]
    fn test_builder() {
        let opts = ParseOptions::new()
            .filename("a.json")
            .max_depth(8)
            .reject_trailing_content(true);
        assert_eq!(opts.filename.as_deref(), Some("a.json"));
        assert_eq!(opts.max_depth, Some(8));
        assert!(opts.reject_trailing_content);
    }
}
