//! State machine lexer
//!
//!     The lexer is a set of states, each of which consumes some input, possibly emits tokens,
//!     and names the state to run next. Running out of states ends the lexing. Emitted tokens
//!     are queued and handed out through the [`Iterator`] implementation, so the machine only
//!     runs as far ahead as the consumer pulls.
//!
//!     States:
//!
//!         Start             line starts and running text. Decides between blank lines,
//!                           indentation, section headers and paragraphs.
//!         Space             leading spaces and tabs of a line.
//!         Section           inside a section header, dispatches to the two states below.
//!         Title             a title line.
//!         SectionAdornment  an overline or transition line.
//!
//!     Underlines are lexed inline by the Section state when they directly follow a title.

use super::cursor::{is_line_ending, is_space, Cursor};
use super::lookahead::{is_adornment, is_section, is_underlined};
use crate::rst::ast::location::SourceLocation;
use crate::rst::token::{Token, TokenKind};
use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Space,
    Section,
    Title,
    SectionAdornment,
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    location: SourceLocation,
    state: Option<State>,
    emitted: VecDeque<Token>,
    last_kind: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            location: SourceLocation::new(input),
            state: Some(State::Start),
            emitted: VecDeque::new(),
            last_kind: None,
        }
    }

    /// Emit the pending text as a token of `kind`.
    fn emit(&mut self, kind: TokenKind) {
        // Never emit an empty token in the middle of the input.
        if self.cursor.at_boundary() && !self.cursor.at_eof() {
            self.cursor.next();
        }
        let at = self
            .location
            .position(self.cursor.input(), self.cursor.start());
        let token = Token::new(kind, self.cursor.pending(), at.column, at.line);
        trace!(token = %token, "emit");

        self.last_kind = Some(kind);
        self.emitted.push_back(token);
        self.cursor.ignore();
    }

    /// Emit the rest of the line as `kind` and step over the line ending.
    fn emit_line(&mut self, kind: TokenKind) {
        self.cursor.advance_to_line_end();
        self.emit(kind);
        self.cursor.skip_line_ending();
        self.cursor.ignore();
    }

    fn step(&mut self, state: State) -> Option<State> {
        trace!(?state, pos = self.cursor.pos(), "state");
        match state {
            State::Start => self.lex_start(),
            State::Space => self.lex_space(),
            State::Section => self.lex_section(),
            State::Title => {
                self.emit_line(TokenKind::Title);
                Some(State::Section)
            }
            State::SectionAdornment => {
                self.emit_line(TokenKind::SectionAdornment);
                Some(State::Section)
            }
        }
    }

    fn lex_start(&mut self) -> Option<State> {
        loop {
            if self.cursor.at_boundary() {
                match self.cursor.current() {
                    None => break,
                    Some(c) if is_line_ending(c) => {
                        self.cursor.skip_line_ending();
                        self.emit(TokenKind::BlankLine);
                        return Some(State::Start);
                    }
                    Some(c) if is_space(c) => return Some(State::Space),
                    Some(_) if is_section(self.cursor.rest()) => return Some(State::Section),
                    Some(_) => {}
                }
            }
            match self.cursor.current() {
                None => break,
                Some(c) if is_line_ending(c) => {
                    self.emit(TokenKind::Paragraph);
                    self.cursor.skip_line_ending();
                    self.cursor.ignore();
                    return Some(State::Start);
                }
                Some(_) => {
                    self.cursor.next();
                }
            }
        }

        if !self.cursor.at_boundary() {
            self.emit(TokenKind::Paragraph);
        }
        self.emit(TokenKind::Eof);
        None
    }

    /// Indentation. A line holding nothing but whitespace is a blank line.
    fn lex_space(&mut self) -> Option<State> {
        self.cursor.skip_spaces();
        match self.cursor.current() {
            Some(c) if !is_line_ending(c) => self.emit(TokenKind::Space),
            _ => {
                self.cursor.skip_line_ending();
                self.emit(TokenKind::BlankLine);
            }
        }
        Some(State::Start)
    }

    fn lex_section(&mut self) -> Option<State> {
        match self.cursor.current() {
            Some(c) if is_adornment(c) => {
                if self.last_kind == Some(TokenKind::Title) {
                    self.emit_line(TokenKind::SectionAdornment);
                    Some(State::Start)
                } else {
                    Some(State::SectionAdornment)
                }
            }
            Some(c) if is_space(c) => Some(State::Space),
            Some(c) if is_line_ending(c) => Some(State::Start),
            Some(_) if is_underlined(self.cursor.rest()) => Some(State::Title),
            _ => Some(State::Start),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.emitted.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            self.state = self.step(state);
        }
    }
}

/// Lex the whole input. The last token is always `EOF`.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
