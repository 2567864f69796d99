//! Difficulty levels and the clue-removal policy.

use std::{fmt, ops::RangeInclusive};

/// Puzzle difficulty, controlling how many clues are removed after
/// full-solution generation.
///
/// Difficulty is a clue-count heuristic only: more removed cells make a
/// harder puzzle. No solving-technique rating is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    /// Fewest removed cells, most clues.
    Easy,
    /// Mid-range removal count.
    #[default]
    Medium,
    /// Most removed cells, fewest clues.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the difficulty name, for UI labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Returns the numeric level (1 = Easy, 2 = Medium, 3 = Hard).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Creates a difficulty from its numeric level, or `None` outside 1-3.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Returns the range the removal count is drawn from.
    ///
    /// The ranges are a tunable policy; the invariant is that they are
    /// disjoint and strictly increasing with difficulty, and never contain 0.
    #[must_use]
    pub const fn removal_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 30..=35,
            Self::Medium => 40..=45,
            Self::Hard => 50..=55,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(difficulty.level()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_removal_ranges_increase_strictly() {
        for pair in Difficulty::ALL.windows(2) {
            let (easier, harder) = (pair[0], pair[1]);
            assert!(easier.removal_range().end() < harder.removal_range().start());
        }
    }

    #[test]
    fn test_removal_ranges_leave_playable_grids() {
        for difficulty in Difficulty::ALL {
            let range = difficulty.removal_range();
            assert!(*range.start() > 0);
            assert!(*range.end() < 81);
        }
    }
}
