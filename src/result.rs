//! Classification result types.

use core::fmt;

/// Name reported for an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandName {
    /// Every card shares one suit.
    Flush,
    /// Some rank appears exactly three times.
    ThreeOfAKind,
    /// Some rank appears exactly twice.
    Pair,
    /// No pattern matched.
    NoMatch,
    /// The input could not be parsed into a valid hand.
    Error,
}

impl HandName {
    /// Returns the output string for this name.
    ///
    /// ```
    /// use handname::HandName;
    ///
    /// assert_eq!(HandName::NoMatch.as_str(), "No Match");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flush => "Flush",
            Self::ThreeOfAKind => "ThreeOfAKind",
            Self::Pair => "Pair",
            Self::NoMatch => "No Match",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for HandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
