//! Section header lookahead
//!
//!     Whether a line starts a section header can only be decided by looking at the line after
//!     it. These checks work on the unread input slice, so they never move the lexer's cursor.
//!
//!     A header starts either with an adornment line (two identical adornment runes in a row,
//!     the overline or transition case) or with a text line whose next line is an adornment
//!     run (the underline case):
//!
//!         Title          ======
//!         =====          Title
//!                        ======

use super::cursor::{is_line_ending, is_space};

/// Punctuation runes that may form adornment lines
pub const ADORNMENTS: &[char] = &[
    '!', '"', '#', '$', '\'', '%', '&', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

pub fn is_adornment(c: char) -> bool {
    ADORNMENTS.contains(&c)
}

/// Does the input at the start of `rest` begin a section header?
pub fn is_section(rest: &str) -> bool {
    starts_adornment_run(rest) || is_underlined(rest)
}

/// The first two runes are the same adornment rune.
pub fn starts_adornment_run(rest: &str) -> bool {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => is_adornment(a) && a == b,
        _ => false,
    }
}

/// Is the line after the current one an adornment run?
///
/// The next line may be indented, but not blank. It matches when its first two runes are the
/// same adornment rune, or when it holds a single adornment rune.
pub fn is_underlined(rest: &str) -> bool {
    let Some(end) = rest.find(is_line_ending) else {
        return false;
    };
    let after = &rest[end..];
    let after = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .or_else(|| after.strip_prefix('\r'))
        .unwrap_or(after);

    let mut chars = after.trim_start_matches(is_space).chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_adornment(first) {
        return false;
    }
    match chars.next() {
        None => true,
        Some(c) if is_line_ending(c) => true,
        Some(c) => c == first,
    }
}
