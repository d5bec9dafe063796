//! Property-based tests for the lexer and the tree builder
//!
//! Documents are generated from lines that mix text, adornment runs, indentation and blank
//! lines, so the section and block quote paths get exercised along with plain text.

use proptest::prelude::*;
use rst::rst::ast::{AstNode, Node, SourceLocation};
use rst::rst::lexing::tokenize;
use rst::rst::{parse, TokenKind};
use std::collections::HashSet;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z ]{0,12}",
        "[=\\-~#*^]{1,8}",
        "(    |  |\t)[a-z]{1,8}",
        "  [=\\-]{1,6}",
        Just(String::new()),
        "[ÄÖÜäöüß]{1,4}",
        "[\\x00-\\x1f]{1,3}",
    ]
}

fn line_ending() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec((line(), line_ending()), 0..24).prop_map(|lines| {
        lines
            .into_iter()
            .map(|(text, ending)| format!("{text}{ending}"))
            .collect()
    })
}

/// Nodes built from source text: everything outside system messages.
fn source_nodes<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        match node {
            Node::SystemMessage(_) => {}
            Node::Section(s) => {
                out.push(node);
                source_nodes(&s.children, out);
            }
            Node::BlockQuote(q) => source_nodes(&q.children, out),
            _ => out.push(node),
        }
    }
}

proptest! {
    #[test]
    fn lexer_ends_with_single_eof(source in document()) {
        let tokens = tokenize(&source);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn token_values_slice_back_out_of_the_source(source in document()) {
        let loc = SourceLocation::new(&source);
        for token in tokenize(&source) {
            if matches!(token.kind, TokenKind::BlankLine | TokenKind::Eof) {
                continue;
            }
            prop_assert_eq!(
                loc.slice(&source, token.line, token.position, token.length),
                Some(token.value.as_str()),
                "token {}", token
            );
        }
    }

    #[test]
    fn parse_never_panics_and_nodes_point_at_their_text(source in document()) {
        let (tree, errors) = parse("prop", &source);
        prop_assert_eq!(&tree.errors, &errors);

        let loc = SourceLocation::new(&source);
        let mut nodes = Vec::new();
        source_nodes(&tree.root, &mut nodes);
        for node in nodes {
            let (text, length) = match node {
                Node::Section(s) => (s.text.as_str(), s.length),
                Node::Paragraph(p) => (p.text.as_str(), p.length),
                _ => continue,
            };
            prop_assert_eq!(
                loc.slice(&source, node.line_number(), node.start_position(), length),
                Some(text)
            );
        }
    }

    #[test]
    fn node_ids_are_unique(source in document()) {
        let (tree, _) = parse("prop", &source);
        let ids: Vec<usize> = tree.nodes().iter().map(|n| n.id()).collect();
        let unique: HashSet<usize> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn short_underlines_always_carry_a_warning(source in document()) {
        let (tree, _) = parse("prop", &source);
        for node in tree.nodes() {
            if let Node::Section(s) = node {
                if s.underline.length != s.length {
                    prop_assert!(matches!(s.children.first(), Some(Node::SystemMessage(_))));
                }
            }
        }
    }
}
