//! Input cursor.
//!
//! The cursor walks an immutable source string left to right. It tracks a byte
//! offset; every structural JSON character is ASCII, so the offset always sits
//! on a character boundary.

use crate::error::Location;

pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// The character under the cursor, or `None` past the end.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Move past the current character. No-op at the end.
    pub fn step(&mut self) {
        if let Some(ch) = self.peek() {
            self.offset += ch.len_utf8();
        }
    }

    /// Move forward `n` bytes. Callers only skip ASCII they have already matched.
    pub fn advance(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.source.len());
    }

    /// Source text between `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.offset += 1;
        }
    }

    /// Resolve a byte offset into a line/column location.
    pub fn location_of(&self, offset: usize, filename: Option<&str>) -> Location {
        let before = &self.source[..offset.min(self.source.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Location {
            offset,
            line,
            column,
            filename: filename.map(String::from),
        }
    }
}
