//! Lookahead window over a token source
//!
//!     The tree builder needs to see a few tokens on both sides of the one it is working on:
//!     an underline is only understood by looking back at its title (and the overline before
//!     that), and an overline by looking ahead at the title and underline after it. The window
//!     keeps up to [`MAX_BEHIND`] consumed tokens and up to [`MAX_PEEK`] fetched ones, so it
//!     never holds more than [`CAPACITY`] tokens.

use crate::rst::token::Token;
use std::collections::VecDeque;

pub const MAX_BEHIND: usize = 3;
pub const MAX_PEEK: usize = 3;
pub const CAPACITY: usize = MAX_BEHIND + 1 + MAX_PEEK;

pub struct TokenWindow<I: Iterator<Item = Token>> {
    source: I,
    buffer: VecDeque<Token>,
    /// Number of buffered tokens at or behind the current one
    consumed: usize,
    last_line: usize,
}

impl<I: Iterator<Item = Token>> TokenWindow<I> {
    pub fn new(source: I) -> Self {
        Self {
            source,
            buffer: VecDeque::with_capacity(CAPACITY),
            consumed: 0,
            last_line: 1,
        }
    }

    /// Pull one token from the source. An exhausted source keeps yielding EOF.
    fn fetch(&mut self) {
        let token = match self.source.next() {
            Some(token) => token,
            None => Token::eof(1, self.last_line),
        };
        self.last_line = token.line;
        self.buffer.push_back(token);
    }

    /// Advance and return the new current token.
    pub fn next(&mut self) -> Token {
        if self.consumed == self.buffer.len() {
            self.fetch();
        }
        self.consumed += 1;
        while self.consumed > MAX_BEHIND + 1 {
            self.buffer.pop_front();
            self.consumed -= 1;
        }
        self.buffer[self.consumed - 1].clone()
    }

    /// Look `n` tokens ahead of the current one without consuming.
    ///
    /// # Panics
    ///
    /// When `n` is 0 or larger than [`MAX_PEEK`].
    pub fn peek(&mut self, n: usize) -> &Token {
        assert!(
            (1..=MAX_PEEK).contains(&n),
            "peek depth {n} outside 1..={MAX_PEEK}"
        );
        while self.buffer.len() < self.consumed + n {
            self.fetch();
        }
        &self.buffer[self.consumed + n - 1]
    }

    /// Look `n` tokens behind the current one. `peek_back(0)` is the current token.
    pub fn peek_back(&self, n: usize) -> Option<&Token> {
        let index = self.consumed.checked_sub(n + 1)?;
        self.buffer.get(index)
    }

    pub fn current(&self) -> Option<&Token> {
        self.peek_back(0)
    }

    /// Undo the last `next()`.
    ///
    /// # Panics
    ///
    /// When there is no current token to step back over.
    pub fn backup(&mut self) {
        assert!(self.consumed > 0, "backup with no current token");
        self.consumed -= 1;
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
