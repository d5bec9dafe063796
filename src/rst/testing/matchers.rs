//! Text matching utilities for tree assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Panic with a message naming `context` unless `actual` matches.
    pub fn assert(&self, actual: &str, context: &str) {
        let (how, expected) = match self {
            TextMatch::Exact(e) => ("be", e),
            TextMatch::StartsWith(e) => ("start with", e),
            TextMatch::Contains(e) => ("contain", e),
        };
        assert!(
            self.matches(actual),
            "{context}: Expected text to {how} '{expected}', but got '{actual}'"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact("Title".into()).matches("Title"));
        assert!(TextMatch::StartsWith("Ti".into()).matches("Title"));
        assert!(TextMatch::Contains("tl".into()).matches("Title"));
        assert!(!TextMatch::Exact("Title".into()).matches("Titles"));
    }

    #[test]
    #[should_panic(expected = "items[0]: Expected text to start with 'X'")]
    fn test_assert_reports_context() {
        TextMatch::StartsWith("X".into()).assert("Title", "items[0]");
    }
}
