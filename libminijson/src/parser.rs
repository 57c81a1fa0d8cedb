//! Recursive-descent value parser.
//!
//! The dispatcher looks at the character under the cursor and hands off to a
//! decoder for that value type. Object and array decoders call back into the
//! dispatcher for their members, so nesting depth maps directly onto the
//! native call stack.

use crate::cursor::Cursor;
use crate::error::{Location, ParseError, Result};
use crate::options::ParseOptions;
use crate::value::{Map, Value};
use num_bigint::BigUint;
use tracing::{debug, trace};

/// Parser over a single input document.
///
/// An instance owns its cursor and is consumed by [`Parser::parse`]. After
/// any error the parser is left mid-value and should be dropped.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Parse the whole document.
    ///
    /// Unless [`ParseOptions::reject_trailing_content`] is set, anything after
    /// the first complete value is left unread.
    pub fn parse(mut self) -> Result<Value> {
        trace!(bytes = self.cursor.source_len(), "parsing document");
        let result = self.parse_document();
        if let Err(err) = &result {
            debug!(error = %err, "parse failed");
        }
        result
    }

    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        if self.options.reject_trailing_content {
            self.cursor.skip_whitespace();
            if !self.cursor.is_at_end() {
                return Err(self.syntax("Unexpected extra content", self.cursor.offset()));
            }
        }
        Ok(value)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Parse one value starting at the cursor, skipping leading whitespace.
    ///
    /// On success the cursor is one past the value's last character.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        match self.current("a value")? {
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            '"' => self.parse_string().map(Value::String),
            't' => self.parse_literal("true", Value::Bool(true)),
            'f' => self.parse_literal("false", Value::Bool(false)),
            'n' => self.parse_literal("null", Value::Null),
            '0'..='9' => self.parse_number(),
            other => Err(self.syntax(
                format!("Unexpected character '{}'", other),
                self.cursor.offset(),
            )),
        }
    }

    // ========================================================================
    // Compounds
    // ========================================================================

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.cursor.step();
        let mut object = Map::new();

        while self.current("a key or '}'")? != '}' {
            self.cursor.skip_whitespace();
            let key = self.parse_key()?;

            if self.current("':'")? != ':' {
                return Err(self.syntax("Expected ':'", self.cursor.offset()));
            }
            self.cursor.skip_whitespace();
            self.cursor.step();
            self.cursor.skip_whitespace();

            let value = self.parse_value()?;
            // IndexMap keeps an existing key at its original position.
            object.insert(key, value);

            match self.current("',' or '}'")? {
                ',' => self.cursor.step(),
                '}' => {}
                _ => return Err(self.syntax("Expected ',' or '}'", self.cursor.offset())),
            }
        }

        self.cursor.step();
        self.leave();
        Ok(Value::Object(object))
    }

    /// Object keys must be strings; anything else is rejected before dispatch.
    fn parse_key(&mut self) -> Result<String> {
        if self.current("a string key")? != '"' {
            return Err(self.syntax("Expected string key", self.cursor.offset()));
        }
        self.parse_string()
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.cursor.step();
        let mut array = Vec::new();

        while self.current("a value or ']'")? != ']' {
            array.push(self.parse_value()?);

            match self.current("',' or ']'")? {
                ',' => self.cursor.step(),
                ']' => {}
                _ => return Err(self.syntax("Expected ',' or ']'", self.cursor.offset())),
            }
        }

        self.cursor.step();
        self.leave();
        Ok(Value::Array(array))
    }

    /// Track nesting on the way into an object or array.
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        trace!(depth = self.depth, offset = self.cursor.offset(), "entering compound");
        match self.options.max_depth {
            Some(limit) if self.depth > limit => Err(ParseError::NestingTooDeep {
                limit,
                location: self.location(self.cursor.offset()),
            }),
            _ => Ok(()),
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ========================================================================
    // Scalars
    // ========================================================================

    /// Raw text up to the next `"`. Backslashes have no special meaning, so
    /// `\"` ends the string.
    fn parse_string(&mut self) -> Result<String> {
        self.cursor.step();
        let start = self.cursor.offset();
        loop {
            match self.cursor.peek() {
                Some('"') => break,
                Some(_) => self.cursor.step(),
                None => return Err(self.end_of_input("closing '\"'")),
            }
        }
        let text = self.cursor.slice_from(start).to_string();
        self.cursor.step();
        Ok(text)
    }

    fn parse_literal(&mut self, keyword: &'static str, value: Value) -> Result<Value> {
        if !self.cursor.rest().starts_with(keyword) {
            return Err(self.syntax(format!("Expected '{}'", keyword), self.cursor.offset()));
        }
        self.cursor.advance(keyword.len());
        Ok(value)
    }

    /// A run of ASCII digits. Signs, fractions and exponents end the run and
    /// are left for the caller.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.cursor.offset();
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            self.cursor.step();
        }
        self.cursor
            .slice_from(start)
            .parse::<BigUint>()
            .map(Value::Integer)
            .map_err(|e| self.syntax(format!("Invalid number: {}", e), start))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// The character under the cursor, or `EndOfInput` naming what was wanted.
    fn current(&self, expected: &'static str) -> Result<char> {
        self.cursor.peek().ok_or_else(|| self.end_of_input(expected))
    }

    fn location(&self, offset: usize) -> Location {
        self.cursor
            .location_of(offset, self.options.filename.as_deref())
    }

    fn syntax(&self, message: impl Into<String>, offset: usize) -> ParseError {
        ParseError::Syntax {
            message: message.into(),
            location: self.location(offset),
        }
    }

    fn end_of_input(&self, expected: &'static str) -> ParseError {
        ParseError::EndOfInput {
            expected,
            location: self.location(self.cursor.offset()),
        }
    }
}
