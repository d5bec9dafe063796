//! Rune cursor over the lexer input
//!
//!     The cursor keeps two byte offsets into the input: `start`, where the pending token
//!     begins, and `pos`, the next unread byte. `input[start..pos]` is the token being built.

/// True for the characters that end a line. `\r\n` is treated as a single ending.
pub fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
    /// Byte width of the rune returned by the last `next()`, so it can be backed up
    width: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            width: 0,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Nothing has been consumed since the last emitted token
    pub fn at_boundary(&self) -> bool {
        self.start == self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume and return the next rune.
    pub fn next(&mut self) -> Option<char> {
        match self.current() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the rune returned by the last `next()`. Only valid once per `next()`.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// The rune at `pos`, without consuming it
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The rune after the current one
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Unread input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The pending token text
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Drop the pending text without emitting it.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Consume runes up to, but not including, the next line ending or EOF.
    pub fn advance_to_line_end(&mut self) {
        while let Some(c) = self.current() {
            if is_line_ending(c) {
                break;
            }
            self.next();
        }
    }

    /// Consume spaces and tabs.
    pub fn skip_spaces(&mut self) {
        while self.current().is_some_and(is_space) {
            self.next();
        }
    }

    /// Consume one line ending (`\r\n`, `\n` or `\r`) if the cursor is on one.
    /// Returns whether anything was consumed.
    pub fn skip_line_ending(&mut self) -> bool {
        match self.current() {
            Some('\r') => {
                self.next();
                if self.current() == Some('\n') {
                    self.next();
                }
                true
            }
            Some('\n') => {
                self.next();
                true
            }
            _ => false,
        }
    }
}
