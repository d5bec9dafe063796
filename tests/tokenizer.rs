//! Token sequences for whole documents

use rst::rst::formats::{render, OutputFormat};
use rst::rst::lexing::{tokenize, TokenStream};
use rst::rst::TokenKind::{self, *};
use rstest::rstest;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[rstest]
#[case::empty("", vec![Eof])]
#[case::paragraph("text\n", vec![Paragraph, Eof])]
#[case::section("Title\n=====\n", vec![Title, SectionAdornment, Eof])]
#[case::one_rune_underline("A\n=\n", vec![Title, SectionAdornment, Eof])]
#[case::overline("---\nTop\n---\n", vec![SectionAdornment, Title, SectionAdornment, Eof])]
#[case::quote("a\n\n    b\n", vec![Paragraph, BlankLine, Space, Paragraph, Eof])]
#[case::indented_underline("T\n  ==\n", vec![Title, Space, SectionAdornment, Eof])]
#[case::blank_whitespace_line("a\n \t \nb", vec![Paragraph, BlankLine, Paragraph, Eof])]
fn test_token_kinds(#[case] source: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(source), expected);
}

#[test]
fn test_document_token_dump() {
    let source = "=======\nDoc\n=======\n\nIntro.\n\nPart\n----\n\n    Quoted.\n";
    let dump = render("input", source, OutputFormat::Tokens).unwrap();

    insta::assert_snapshot!(dump, @r#"
    1:1 SectionAdornment "======="
    2:1 Title "Doc"
    3:1 SectionAdornment "======="
    4:1 BlankLine "\n"
    5:1 Paragraph "Intro."
    6:1 BlankLine "\n"
    7:1 Title "Part"
    8:1 SectionAdornment "----"
    9:1 BlankLine "\n"
    10:1 Space "    "
    10:5 Paragraph "Quoted."
    11:1 EOF ""
    "#);
}

#[test]
fn test_threaded_stream_matches_lexer() {
    let source = "=======\nDoc\n=======\n\nIntro.\n\n    Quoted.\n";
    let streamed: Vec<_> = TokenStream::spawn(source.to_string()).unwrap().collect();
    assert_eq!(streamed, tokenize(source));
}
