//! Tree builder
//!
//!     A single forward pass over the tokens. Each token is dispatched on its kind; nodes are
//!     appended to the current insertion target, which starts as the root list and moves into
//!     every section or block quote as it is opened.
//!
//!     Targets are index paths from the root (see [`NodePath`]). Nodes are only ever appended,
//!     so a path stays valid for the whole parse.
//!
//!     Nothing here fails: malformed markup becomes a system message node and an entry in the
//!     error list, and the pass carries on with the next token.

use super::levels::{NodePath, Resolution, SectionLevels};
use super::messages::{system_message, title_literal};
use super::window::TokenWindow;
use crate::rst::ast::error::{ErrorKind, MessageKind, ParseError};
use crate::rst::ast::tree::{NodeIds, Tree};
use crate::rst::ast::{Adornment, BlockQuote, Node, NodeList, Paragraph, Section};
use crate::rst::config::ParserConfig;
use crate::rst::token::{Token, TokenKind};
use tracing::debug;

pub struct Parser<I: Iterator<Item = Token>> {
    name: String,
    window: TokenWindow<I>,
    indent_width: usize,
    ids: NodeIds,
    levels: SectionLevels,
    root: NodeList,
    errors: Vec<ParseError>,
    /// Where new nodes go
    target: NodePath,
    /// Child list of the innermost open section, or the root
    section_target: NodePath,
    /// Open block quotes, outermost first
    quotes: Vec<(usize, NodePath)>,
    indent_level: usize,
    /// An overline was seen and waits for its title and underline
    overline_pending: bool,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(name: impl Into<String>, tokens: I, config: &ParserConfig) -> Self {
        Self {
            name: name.into(),
            window: TokenWindow::new(tokens),
            indent_width: config.indent_width.max(1),
            ids: NodeIds::new(),
            levels: SectionLevels::new(),
            root: NodeList::new(),
            errors: Vec::new(),
            target: NodePath::new(),
            section_target: NodePath::new(),
            quotes: Vec::new(),
            indent_level: 0,
            overline_pending: false,
        }
    }

    pub fn parse(mut self) -> Tree {
        while !self.window.peek(1).is_eof() {
            let token = self.window.next();
            debug!(kind = %token.kind, line = token.line, "dispatch");
            match token.kind {
                TokenKind::SectionAdornment => self.section(&token),
                TokenKind::Paragraph => self.paragraph(&token),
                TokenKind::Space => self.indent(&token),
                TokenKind::Title => self.title(&token),
                TokenKind::BlankLine => {}
                TokenKind::Eof => break,
                other => self.record(token.line, ErrorKind::Unimplemented(other)),
            }
        }

        Tree {
            name: self.name,
            root: self.root,
            errors: self.errors,
        }
    }

    fn record(&mut self, line: usize, kind: ErrorKind) {
        let err = ParseError::new(self.name.as_str(), line, kind);
        debug!(error = %err, "diagnostic");
        self.errors.push(err);
    }

    fn prev_kind(&self, n: usize) -> Option<TokenKind> {
        self.window.peek_back(n).map(|t| t.kind)
    }

    /// Append `node` under `parent` and return the node's own path.
    fn append_at(&mut self, parent: &[usize], node: Node) -> NodePath {
        let list = list_at_mut(&mut self.root, parent);
        list.push(node);
        let mut path = parent.to_vec();
        path.push(list.len() - 1);
        path
    }

    fn append(&mut self, node: Node) -> NodePath {
        let parent = self.target.clone();
        self.append_at(&parent, node)
    }

    /// Place a system message at the current target and record it.
    fn message(&mut self, kind: MessageKind, literal: String, at: &Token, trigger_line: usize) {
        let msg = system_message(&mut self.ids, kind, literal, at.position, at.line);
        self.append(Node::SystemMessage(msg));
        self.record(trigger_line, ErrorKind::SystemMessage(kind));
    }

    fn title(&mut self, token: &Token) {
        let next = self.window.peek(1).kind;
        let underlined = next == TokenKind::SectionAdornment
            || (next == TokenKind::Space && self.window.peek(2).is(TokenKind::SectionAdornment));
        if !underlined {
            self.overline_pending = false;
            self.record(
                token.line,
                ErrorKind::MissingUnderline {
                    title: token.value.clone(),
                },
            );
        }
    }

    fn section(&mut self, token: &Token) {
        match self.prev_kind(1) {
            Some(TokenKind::Space) => {
                self.overline_pending = false;
                match self.window.peek_back(2).cloned() {
                    Some(title) if title.is(TokenKind::Title) => self.message(
                        MessageKind::ErrorUnexpectedSectionTitle,
                        title_literal(&title.value, &token.value),
                        &title,
                        token.line,
                    ),
                    _ => self.message(
                        MessageKind::ErrorUnexpectedSectionTitleOrTransition,
                        token.value.clone(),
                        token,
                        token.line,
                    ),
                }
                return;
            }
            Some(TokenKind::Title) => {}
            _ => {
                if self.window.peek(1).is(TokenKind::Title)
                    && self.window.peek(2).is(TokenKind::SectionAdornment)
                {
                    self.overline_pending = true;
                    return;
                }
                self.message(
                    MessageKind::ErrorUnexpectedSectionTitleOrTransition,
                    token.value.clone(),
                    token,
                    token.line,
                );
                return;
            }
        }

        let Some(title) = self.window.peek_back(1).cloned() else {
            return;
        };
        let overline = if self.overline_pending {
            self.window
                .peek_back(2)
                .filter(|t| t.is(TokenKind::SectionAdornment))
                .cloned()
        } else {
            None
        };
        self.overline_pending = false;

        if !token.is(TokenKind::SectionAdornment) {
            self.window.backup();
            self.message(
                MessageKind::ErrorUnexpectedSectionTitle,
                title_literal(&title.value, &token.value),
                &title,
                token.line,
            );
            return;
        }

        if let Some(over) = &overline {
            if over.length != title.length {
                self.record(over.line, ErrorKind::OverlineLengthMismatch);
            } else if over.value != token.value {
                self.record(over.line, ErrorKind::OverlineUnderlineMismatch);
            }
        }

        let over = overline.map(|o| Adornment::from_token(self.ids.next_id(), &o));
        let under = Adornment::from_token(self.ids.next_id(), token);
        let mut section = Section::new(self.ids.next_id(), &title, over, under);

        let rune = section.rune();
        let resolution = self.levels.resolve(rune, &title.value);
        section.level = resolution.level();
        let parent = match resolution {
            Resolution::New(_) => self.section_target.clone(),
            Resolution::Reused(level) | Resolution::Duplicate(level) => {
                self.levels.parent_path(level)
            }
        };
        if let Resolution::Duplicate(_) = resolution {
            self.record(
                token.line,
                ErrorKind::DuplicateSection {
                    title: title.value.clone(),
                    rune,
                },
            );
        }

        if token.length != title.length {
            let kind = MessageKind::WarningShortUnderline;
            let msg = system_message(
                &mut self.ids,
                kind,
                title_literal(&title.value, &token.value),
                title.position,
                title.line,
            );
            section.children.push(Node::SystemMessage(msg));
            self.record(token.line, ErrorKind::SystemMessage(kind));
        }

        debug!(title = %title.value, level = section.level, ?parent, "section");
        let path = self.append_at(&parent, Node::Section(section));
        self.levels.record(rune, resolution, &title.value, path.clone());
        self.target = path.clone();
        self.section_target = path;
        self.quotes.clear();
        self.indent_level = 0;
    }

    fn paragraph(&mut self, token: &Token) {
        if self.indent_level > 0 && self.prev_kind(1) == Some(TokenKind::BlankLine) {
            self.close_quotes();
        }
        let para = Paragraph::from_token(self.ids.next_id(), token);
        self.append(Node::Paragraph(para));
    }

    fn indent(&mut self, token: &Token) {
        if self.prev_kind(1) != Some(TokenKind::BlankLine) {
            return;
        }
        let level = token.length / self.indent_width;
        if level == self.indent_level {
            return;
        }
        if level == 0 {
            self.close_quotes();
            return;
        }

        while self.quotes.last().is_some_and(|(l, _)| *l > level) {
            self.quotes.pop();
        }
        // Back at the level of an enclosing quote: continue it.
        if let Some((_, path)) = self.quotes.last().filter(|(l, _)| *l == level) {
            self.target = path.clone();
            self.indent_level = level;
            return;
        }
        let parent = match self.quotes.last() {
            Some((_, path)) => path.clone(),
            None => self.section_target.clone(),
        };
        debug!(level, ?parent, "block quote");
        let quote = BlockQuote::new(self.ids.next_id(), level, token.length + 1, token.line);
        let path = self.append_at(&parent, Node::BlockQuote(quote));
        self.quotes.push((level, path.clone()));
        self.target = path;
        self.indent_level = level;
    }

    fn close_quotes(&mut self) {
        self.quotes.clear();
        self.target = self.section_target.clone();
        self.indent_level = 0;
    }
}

/// Resolve a path to the child list it names.
///
/// # Panics
///
/// When the path does not lead to a container. Paths are only built from appended nodes,
/// so this means the builder's bookkeeping is broken.
fn list_at_mut<'a>(mut list: &'a mut NodeList, path: &[usize]) -> &'a mut NodeList {
    for &index in path {
        list = match list.get_mut(index).and_then(Node::children_mut) {
            Some(children) => children,
            None => panic!("insertion path {path:?} does not name a container"),
        };
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::AstNode;
    use crate::rst::lexing::Lexer;

    fn build(input: &str) -> Tree {
        Parser::new("test", Lexer::new(input), &ParserConfig::default()).parse()
    }

    #[test]
    fn test_ids_follow_construction_order() {
        let tree = build("Title\n===\n");
        let section = tree.root[0].as_section().unwrap();
        assert_eq!(section.underline.id, 1);
        assert_eq!(section.id, 2);
        assert_eq!(section.children[0].id(), 3);
        let ids: Vec<usize> = section.children[0]
            .children()
            .unwrap()
            .iter()
            .map(|n| n.id())
            .collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_overline_ids_come_first() {
        let tree = build("=====\nTitle\n=====\n");
        let section = tree.root[0].as_section().unwrap();
        assert_eq!(section.overline.as_ref().map(|o| o.id), Some(1));
        assert_eq!(section.underline.id, 2);
        assert_eq!(section.id, 3);
        assert!(tree.errors.is_empty());
    }

    #[test]
    fn test_reserved_kind_is_unimplemented() {
        let tokens = vec![
            Token::new(TokenKind::Error, "?", 1, 1),
            Token::new(TokenKind::Paragraph, "text", 1, 2),
            Token::eof(1, 3),
        ];
        let tree = Parser::new("test", tokens.into_iter(), &ParserConfig::default()).parse();
        assert_eq!(
            tree.errors[0].kind,
            ErrorKind::Unimplemented(TokenKind::Error)
        );
        assert_eq!(tree.root.len(), 1);
    }

    #[test]
    fn test_list_at_mut_walks_containers() {
        let mut root = NodeList::new();
        root.push(Node::BlockQuote(BlockQuote::new(1, 1, 5, 1)));
        list_at_mut(&mut root, &[0]).push(Node::Paragraph(Paragraph::synthesized(2, "x", 5, 1)));
        assert_eq!(root[0].children().map(|c| c.len()), Some(1));
    }

    #[test]
    #[should_panic(expected = "does not name a container")]
    fn test_list_at_mut_rejects_leaf() {
        let mut root = NodeList::new();
        root.push(Node::Paragraph(Paragraph::synthesized(1, "x", 1, 1)));
        list_at_mut(&mut root, &[0]);
    }
}
