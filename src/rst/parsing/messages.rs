//! System message construction

use crate::rst::ast::error::MessageKind;
use crate::rst::ast::tree::NodeIds;
use crate::rst::ast::SystemMessage;

/// Build a system message for `kind` quoting `literal`. Takes three ids: the message's,
/// then its explanation paragraph's, then its literal block's.
///
/// Literals that join two source lines count one extra for the line ending that was dropped
/// from the adornment line.
pub fn system_message(
    ids: &mut NodeIds,
    kind: MessageKind,
    literal: String,
    position: usize,
    line: usize,
) -> SystemMessage {
    let ids = [ids.next_id(), ids.next_id(), ids.next_id()];
    let length = literal.chars().count() + usize::from(kind.joins_lines());
    SystemMessage::new(
        ids,
        kind.severity(),
        kind.message(),
        literal,
        position,
        line,
    )
    .with_literal_length(length)
}

/// The literal quoted by the "unexpected title" and "short underline" messages: the title
/// line and its adornment line.
pub fn title_literal(title: &str, adornment: &str) -> String {
    format!("{title}\n{adornment}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::{AstNode, Node, Severity};

    #[test]
    fn test_ids_in_construction_order() {
        let mut ids = NodeIds::new();
        ids.next_id();
        let msg = system_message(
            &mut ids,
            MessageKind::ErrorUnexpectedSectionTitleOrTransition,
            "=====".to_string(),
            1,
            1,
        );
        assert_eq!(msg.id, 2);
        assert_eq!(msg.children[0].id(), 3);
        assert_eq!(msg.children[1].id(), 4);
        assert_eq!(msg.severity, Severity::Severe);
        assert_eq!(
            msg.message(),
            Some("Unexpected section title or transition.")
        );
    }

    fn literal_length(msg: &SystemMessage) -> usize {
        match &msg.children[1] {
            Node::LiteralBlock(l) => l.length,
            other => panic!("expected a literal block, found {other:?}"),
        }
    }

    #[test]
    fn test_joined_literal_length_counts_line_ending() {
        let mut ids = NodeIds::new();
        let literal = title_literal("Title", "===");
        assert_eq!(literal, "Title\n===");

        let warning = system_message(
            &mut ids,
            MessageKind::WarningShortUnderline,
            literal.clone(),
            1,
            1,
        );
        assert_eq!(literal_length(&warning), 10);

        let unexpected = system_message(
            &mut ids,
            MessageKind::ErrorUnexpectedSectionTitle,
            literal,
            1,
            1,
        );
        assert_eq!(literal_length(&unexpected), 10);
    }

    #[test]
    fn test_transition_literal_length_is_text_length() {
        let mut ids = NodeIds::new();
        let msg = system_message(
            &mut ids,
            MessageKind::ErrorUnexpectedSectionTitleOrTransition,
            "=====".to_string(),
            1,
            1,
        );
        assert_eq!(literal_length(&msg), 5);
    }
}
