//! Error types for hand parsing.

use thiserror::Error;

use crate::card::Rank;

/// Reasons an input string cannot be turned into a classifiable hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token was not exactly two characters long.
    #[error("token has {length} characters, expected 2")]
    InvalidTokenLength {
        /// Number of characters in the offending token.
        length: usize,
    },
    /// Unrecognized rank symbol.
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),
    /// Unrecognized suit symbol.
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(char),
    /// Not enough cards to classify.
    #[error("hand has {count} cards, at least {minimum} required")]
    TooFewCards {
        /// Number of cards parsed.
        count: usize,
        /// Configured minimum.
        minimum: usize,
    },
    /// Five cards share a single rank.
    #[error("five cards of rank {0:?}")]
    FiveOfAKind(Rank),
}
