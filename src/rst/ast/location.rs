//! Source location utilities for converting byte offsets to line/column positions
//!
//!     The lexer walks the input by byte offset, but tokens and nodes report 1-based lines and
//!     1-based columns counted in characters. [`SourceLocation`] indexes line starts once and
//!     answers both directions: offset to position, and `(line, position, length)` back to the
//!     source slice, which is how node fields are checked against the original text.

use std::fmt;

/// A 1-based line:column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Index line starts. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = source.as_bytes();

        for (byte_pos, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push(byte_pos + 1),
                b'\r' if bytes.get(byte_pos + 1) != Some(&b'\n') => line_starts.push(byte_pos + 1),
                _ => {}
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based line and character column.
    ///
    /// `offset` must fall on a character boundary of `source`.
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        let line_start = self.line_starts[line];
        let column = source[line_start..offset].chars().count();

        Position::new(line + 1, column + 1)
    }

    /// Recover the text covered by a `(line, position, length)` triple.
    ///
    /// Returns `None` when the triple points outside `source`.
    pub fn slice<'s>(
        &self,
        source: &'s str,
        line: usize,
        position: usize,
        length: usize,
    ) -> Option<&'s str> {
        let line_start = *self.line_starts.get(line.checked_sub(1)?)?;
        let rest = source.get(line_start..)?;
        let mut indices = rest
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(rest.len()));
        let begin = indices.nth(position.checked_sub(1)?)?;
        let end = if length == 0 {
            begin
        } else {
            indices.nth(length - 1)?
        };
        rest.get(begin..end)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of the start of a 1-based line
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line.checked_sub(1)?).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_single_line() {
        let source = "Hello";
        let loc = SourceLocation::new(source);
        assert_eq!(loc.position(source, 0), Position::new(1, 1));
        assert_eq!(loc.position(source, 4), Position::new(1, 5));
        assert_eq!(loc.position(source, 5), Position::new(1, 6));
    }

    #[test]
    fn test_position_multiline() {
        let source = "Hello\nworld\ntest";
        let loc = SourceLocation::new(source);

        assert_eq!(loc.position(source, 5), Position::new(1, 6));
        assert_eq!(loc.position(source, 6), Position::new(2, 1));
        assert_eq!(loc.position(source, 10), Position::new(2, 5));
        assert_eq!(loc.position(source, 12), Position::new(3, 1));
    }

    #[test]
    fn test_position_counts_characters() {
        let source = "Hello\nwörld";
        let loc = SourceLocation::new(source);
        // 'ö' is two bytes wide
        assert_eq!(loc.position(source, 9), Position::new(2, 3));
    }

    #[test]
    fn test_slice() {
        let source = "Title\n=====\n\n    quoted\n";
        let loc = SourceLocation::new(source);

        assert_eq!(loc.slice(source, 1, 1, 5), Some("Title"));
        assert_eq!(loc.slice(source, 2, 1, 5), Some("====="));
        assert_eq!(loc.slice(source, 4, 5, 6), Some("quoted"));
        assert_eq!(loc.slice(source, 4, 1, 0), Some(""));
        assert_eq!(loc.slice(source, 9, 1, 1), None);
        assert_eq!(loc.slice(source, 0, 1, 1), None);
    }

    #[test]
    fn test_slice_unicode() {
        let source = "Ünïcode\n=======";
        let loc = SourceLocation::new(source);
        assert_eq!(loc.slice(source, 1, 2, 3), Some("nïc"));
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let source = "a\r\nb\rc";
        let loc = SourceLocation::new(source);
        assert_eq!(loc.line_count(), 3);
        assert_eq!(loc.position(source, 3), Position::new(2, 1));
        assert_eq!(loc.position(source, 5), Position::new(3, 1));
    }

    #[test]
    fn test_line_count_and_start() {
        let loc = SourceLocation::new("line1\nline2\nline3");
        assert_eq!(loc.line_count(), 3);
        assert_eq!(loc.line_start(1), Some(0));
        assert_eq!(loc.line_start(2), Some(6));
        assert_eq!(loc.line_start(4), None);
    }
}
