//! Treeviz formatter
//!
//! Treeviz is a one line per node rendering of a document tree. Nesting is shown with box
//! drawing connectors, two columns per level, and each line holds the node's icon and its
//! label truncated to 30 characters:
//!
//!     ⧉ input
//!     ├─ § Title
//!     │ └─ ⚠ WARNING: Title underline too s...
//!     │   ├─ ¶ Title underline too short.
//!     │   └─ ␤ Title⏎===
//!     └─ ❝ level 1
//!       └─ ¶ quoted
//!
//! Icons
//!     Tree: ⧉
//!     Section: §
//!     Paragraph: ¶
//!     BlockQuote: ❝
//!     SystemMessage: ⚠
//!     LiteralBlock: ␤
//!     Adornment: ═
//!     BlankLine: ⎵

use crate::rst::ast::snapshot::{snapshot_tree, AstSnapshot};
use crate::rst::ast::tree::Tree;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Tree" => "⧉",
        "Section" => "§",
        "Paragraph" => "¶",
        "BlockQuote" => "❝",
        "SystemMessage" => "⚠",
        "LiteralBlock" => "␤",
        "Adornment" => "═",
        "BlankLine" => "⎵",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum = if show_linum {
        let line = snapshot.attributes.get("line").map(String::as_str).unwrap_or("");
        format!("{line:>2} ")
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum,
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == count, show_linum, output);
    }
}

/// Render a tree, optionally prefixing each node with its source line.
pub fn to_treeviz_str_with_linum(tree: &Tree, show_linum: bool) -> String {
    let snapshot = snapshot_tree(tree);
    let mut output = format!("{} {}\n", get_icon(&snapshot.node_type), snapshot.label);
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == count, show_linum, &mut output);
    }
    output
}

pub fn to_treeviz_str(tree: &Tree) -> String {
    to_treeviz_str_with_linum(tree, false)
}
