//! Rendered output of whole documents

use rst::rst::formats::json::{from_json, to_json};
use rst::rst::formats::treeviz::to_treeviz_str;
use rst::rst::formats::{render, OutputFormat};
use rst::rst::parse;

const DOCUMENT: &str = "=======\nDoc\n=======\n\nIntro.\n\nPart\n----\n\n    Quoted.\n\nShort\n==\n";

#[test]
fn test_treeviz_document() {
    let (tree, _) = parse("input", DOCUMENT);

    insta::assert_snapshot!(to_treeviz_str(&tree), @r"
    ⧉ input
    ├─ § Doc
    │ ├─ ¶ Intro.
    │ └─ § Part
    │   └─ ❝ level 1
    │     └─ ¶ Quoted.
    └─ § Short
      └─ ⚠ WARNING: Title underline too s...
        ├─ ¶ Title underline too short.
        └─ ␤ Short⏎==
    ");
}

#[test]
fn test_json_record_shape() {
    let (tree, _) = parse("input", "Title\n===\n");

    insta::assert_snapshot!(to_json(&tree).unwrap(), @r#"
    {
      "name": "input",
      "node-list": [
        {
          "node-type": "Section",
          "id": 2,
          "text": "Title",
          "level": 1,
          "length": 5,
          "position": 1,
          "line": 1,
          "underline": {
            "id": 1,
            "char": "=",
            "length": 3,
            "position": 1,
            "line": 2
          },
          "node-list": [
            {
              "node-type": "SystemMessage",
              "id": 3,
              "severity": "warning",
              "position": 1,
              "line": 1,
              "node-list": [
                {
                  "node-type": "Paragraph",
                  "id": 4,
                  "text": "Title underline too short.",
                  "length": 26,
                  "position": 1,
                  "line": 1
                },
                {
                  "node-type": "LiteralBlock",
                  "id": 5,
                  "text": "Title\n===",
                  "length": 10,
                  "position": 1,
                  "line": 1
                }
              ]
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn test_json_round_trip() {
    let (tree, _) = parse("input", DOCUMENT);
    let back = from_json(&render("input", DOCUMENT, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(back.root, tree.root);
    assert!(back.errors.is_empty());
}

#[test]
fn test_tokens_json() {
    let out = render("input", "A\n=\n", OutputFormat::TokensJson).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["kind"], "Title");
    assert_eq!(value[1]["kind"], "SectionAdornment");
    assert_eq!(value[2]["kind"], "EOF");
}
