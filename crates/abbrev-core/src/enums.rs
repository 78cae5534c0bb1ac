// Shared enums: Verdict, Direction

use std::fmt;

/// Final answer of an equivalence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The strings can be rewritten into each other under the rules.
    Match,
    /// No rewrite sequence connects the strings within the explored,
    /// de-duplicated state space.
    NoMatch,
}

impl Verdict {
    pub fn is_match(self) -> bool {
        self == Verdict::Match
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Match => "MATCH",
            Verdict::NoMatch => "NO MATCH",
        }
    }
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched { Verdict::Match } else { Verdict::NoMatch }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a directional search runs.
///
/// `Forward` rewrites the first input towards the second, `Backward`
/// rewrites the second towards the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// One-letter tag used in diagnostic traces (`f`/`b`).
    pub fn tag(self) -> char {
        match self {
            Direction::Forward => 'f',
            Direction::Backward => 'b',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
