//! Section level registry
//!
//!     Section levels come from the order in which adornment runes first appear: the first rune
//!     used for an underline is level 1, the next new rune is level 2, and so on. The registry
//!     remembers, per level, its rune, the titles seen with it, and where the latest section of
//!     that level was placed, so that a later section with a known rune can be hung back under
//!     the right parent.

use tracing::debug;

/// Index path from the root list to a node: each entry indexes a child list.
pub type NodePath = Vec<usize>;

#[derive(Debug, Clone)]
struct SectionLevel {
    rune: char,
    level: usize,
    titles: Vec<String>,
    latest: NodePath,
}

/// How a section's rune relates to the levels seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// First section with this rune
    New(usize),
    /// Known rune, new title
    Reused(usize),
    /// Known rune and a title already used with it
    Duplicate(usize),
}

impl Resolution {
    pub fn level(&self) -> usize {
        match *self {
            Resolution::New(level) | Resolution::Reused(level) | Resolution::Duplicate(level) => {
                level
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct SectionLevels {
    levels: Vec<SectionLevel>,
}

impl SectionLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct runes seen
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_of(&self, rune: char) -> Option<usize> {
        self.find(rune).map(|l| l.level)
    }

    fn find(&self, rune: char) -> Option<&SectionLevel> {
        self.levels.iter().find(|l| l.rune == rune)
    }

    /// Decide the level of a section titled `title` underlined with `rune`.
    pub fn resolve(&self, rune: char, title: &str) -> Resolution {
        let resolution = match self.find(rune) {
            None => Resolution::New(self.levels.len() + 1),
            Some(existing) if existing.titles.iter().any(|t| t == title) => {
                Resolution::Duplicate(existing.level)
            }
            Some(existing) => Resolution::Reused(existing.level),
        };
        debug!(%rune, title, ?resolution, "section level");
        resolution
    }

    /// Where a section at a known `level` goes: the root for level 1, otherwise the child list
    /// of the latest section one level up.
    pub fn parent_path(&self, level: usize) -> NodePath {
        if level <= 1 {
            return NodePath::new();
        }
        self.levels
            .iter()
            .find(|l| l.level == level - 1)
            .map(|l| l.latest.clone())
            .unwrap_or_default()
    }

    /// Record a placed section.
    pub fn record(&mut self, rune: char, resolution: Resolution, title: &str, path: NodePath) {
        match resolution {
            Resolution::New(level) => self.levels.push(SectionLevel {
                rune,
                level,
                titles: vec![title.to_string()],
                latest: path,
            }),
            Resolution::Reused(_) | Resolution::Duplicate(_) => {
                if let Some(existing) = self.levels.iter_mut().find(|l| l.rune == rune) {
                    if resolution != Resolution::Duplicate(existing.level) {
                        existing.titles.push(title.to_string());
                    }
                    existing.latest = path;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_follow_first_appearance() {
        let mut levels = SectionLevels::new();

        let first = levels.resolve('=', "A");
        assert_eq!(first, Resolution::New(1));
        levels.record('=', first, "A", vec![0]);

        let second = levels.resolve('-', "B");
        assert_eq!(second, Resolution::New(2));
        levels.record('-', second, "B", vec![0, 0]);

        assert_eq!(levels.resolve('=', "C"), Resolution::Reused(1));
        assert_eq!(levels.resolve('-', "D"), Resolution::Reused(2));
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_duplicate_title_and_rune() {
        let mut levels = SectionLevels::new();
        let first = levels.resolve('=', "A");
        levels.record('=', first, "A", vec![0]);

        let dup = levels.resolve('=', "A");
        assert_eq!(dup, Resolution::Duplicate(1));
        levels.record('=', dup, "A", vec![1]);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels.level_of('='), Some(1));
    }

    #[test]
    fn test_parent_path() {
        let mut levels = SectionLevels::new();
        levels.record('=', Resolution::New(1), "A", vec![0]);
        levels.record('-', Resolution::New(2), "B", vec![0, 0]);
        levels.record('=', Resolution::Reused(1), "C", vec![1]);

        assert_eq!(levels.parent_path(1), Vec::<usize>::new());
        assert_eq!(levels.parent_path(2), vec![1]);
        assert_eq!(levels.parent_path(3), vec![0, 0]);
    }
}
