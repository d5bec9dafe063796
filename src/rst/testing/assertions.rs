//! Fluent assertion API for document trees
//!
//!     Tests describe the expected tree from the root down instead of walking nodes by hand:
//!
//!     ```rust,ignore
//!     let (tree, _) = parse("input", "Title\n=====\n\ntext\n");
//!
//!     assert_tree(&tree)
//!         .item_count(1)
//!         .error_count(0)
//!         .item(0, |item| {
//!             item.assert_section()
//!                 .text("Title")
//!                 .level(1)
//!                 .child(0, |child| {
//!                     child.assert_paragraph().text("text");
//!                 });
//!         });
//!     ```
//!
//!     Failures name the path to the offending node, e.g. `items[0].children[1]`.

use super::matchers::TextMatch;
use crate::rst::ast::error::ErrorKind;
use crate::rst::ast::tree::Tree;
use crate::rst::ast::{AstNode, BlockQuote, Node, Paragraph, Section, Severity, SystemMessage};

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| n.node_type().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create an assertion builder for a tree
pub fn assert_tree(tree: &Tree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

pub struct TreeAssertion<'a> {
    tree: &'a Tree,
}

impl<'a> TreeAssertion<'a> {
    /// Assert the number of root items
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.tree.root.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.tree.root)
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.tree.root.len(),
            "Item index {} out of bounds (tree has {} items)",
            index,
            self.tree.root.len()
        );
        assertion(NodeAssertion {
            node: &self.tree.root[index],
            context: format!("items[{index}]"),
        });
        self
    }

    pub fn error_count(self, expected: usize) -> Self {
        let actual = self.tree.errors.len();
        let listed: Vec<String> = self.tree.errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            actual, expected,
            "Expected {expected} errors, found {actual}: {listed:?}"
        );
        self
    }

    pub fn has_error(self, expected: &ErrorKind) -> Self {
        assert!(
            self.tree.errors.iter().any(|e| &e.kind == expected),
            "Expected error {:?} in {:?}",
            expected,
            self.tree.errors
        );
        self
    }

    /// Assert the error at `index` was reported for `line`.
    pub fn error_line(self, index: usize, line: usize) -> Self {
        let actual = self.tree.errors.get(index).map(|e| e.line);
        assert_eq!(actual, Some(line), "errors[{index}]: unexpected line");
        self
    }
}

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> NodeAssertion<'a> {
    fn wrong_type(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.node.node_type()
        )
    }

    pub fn assert_section(self) -> SectionAssertion<'a> {
        match self.node {
            Node::Section(section) => SectionAssertion {
                section,
                context: self.context,
            },
            _ => self.wrong_type("Section"),
        }
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.node {
            Node::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            _ => self.wrong_type("Paragraph"),
        }
    }

    pub fn assert_block_quote(self) -> BlockQuoteAssertion<'a> {
        match self.node {
            Node::BlockQuote(quote) => BlockQuoteAssertion {
                quote,
                context: self.context,
            },
            _ => self.wrong_type("BlockQuote"),
        }
    }

    pub fn assert_system_message(self) -> SystemMessageAssertion<'a> {
        match self.node {
            Node::SystemMessage(message) => SystemMessageAssertion {
                message,
                context: self.context,
            },
            _ => self.wrong_type("SystemMessage"),
        }
    }

    pub fn line(self, expected: usize) -> Self {
        assert_eq!(
            self.node.line_number(),
            expected,
            "{}: unexpected line",
            self.context
        );
        self
    }
}

fn child_count(children: &[Node], expected: usize, context: &str) {
    assert_eq!(
        children.len(),
        expected,
        "{}: Expected {} children, found {}: [{}]",
        context,
        expected,
        children.len(),
        summarize(children)
    );
}

fn child<'a, F>(children: &'a [Node], index: usize, context: &str, assertion: F)
where
    F: FnOnce(NodeAssertion<'a>),
{
    assert!(
        index < children.len(),
        "{}: Child index {} out of bounds ({} children)",
        context,
        index,
        children.len()
    );
    assertion(NodeAssertion {
        node: &children[index],
        context: format!("{context}.children[{index}]"),
    });
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.section.text, &self.context);
        self
    }

    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.section.level, expected,
            "{}: Expected level {}, found {}",
            self.context, expected, self.section.level
        );
        self
    }

    pub fn rune(self, expected: char) -> Self {
        assert_eq!(
            self.section.rune(),
            expected,
            "{}: unexpected adornment rune",
            self.context
        );
        self
    }

    pub fn underline_length(self, expected: usize) -> Self {
        assert_eq!(
            self.section.underline.length, expected,
            "{}: unexpected underline length",
            self.context
        );
        self
    }

    pub fn has_overline(self, expected: bool) -> Self {
        assert_eq!(
            self.section.overline.is_some(),
            expected,
            "{}: overline presence",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        child_count(&self.section.children, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        child(&self.section.children, index, &self.context, assertion);
        self
    }
}

pub struct ParagraphAssertion<'a> {
    para: &'a Paragraph,
    context: String,
}

impl ParagraphAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.para.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.para.text, &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.para.text, &self.context);
        self
    }

    pub fn position(self, expected: usize) -> Self {
        assert_eq!(
            self.para.position, expected,
            "{}: unexpected position",
            self.context
        );
        self
    }
}

pub struct BlockQuoteAssertion<'a> {
    quote: &'a BlockQuote,
    context: String,
}

impl<'a> BlockQuoteAssertion<'a> {
    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.quote.level, expected,
            "{}: Expected level {}, found {}",
            self.context, expected, self.quote.level
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        child_count(&self.quote.children, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        child(&self.quote.children, index, &self.context, assertion);
        self
    }
}

pub struct SystemMessageAssertion<'a> {
    message: &'a SystemMessage,
    context: String,
}

impl SystemMessageAssertion<'_> {
    pub fn severity(self, expected: Severity) -> Self {
        assert_eq!(
            self.message.severity, expected,
            "{}: unexpected severity",
            self.context
        );
        self
    }

    pub fn message(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(self.message.message().unwrap_or_default(), &self.context);
        self
    }

    pub fn literal(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(self.message.literal().unwrap_or_default(), &self.context);
        self
    }

    pub fn literal_length(self, expected: usize) -> Self {
        let actual = self.message.children.iter().find_map(|node| match node {
            Node::LiteralBlock(l) => Some(l.length),
            _ => None,
        });
        assert_eq!(
            actual,
            Some(expected),
            "{}: unexpected literal block length",
            self.context
        );
        self
    }
}
