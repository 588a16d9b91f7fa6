//! Hand pattern predicates.

use crate::card::Card;
use crate::hand::{rank_counts, suit_counts};
use crate::result::HandName;

/// A pattern a set of cards can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// All cards share one suit.
    Flush,
    /// Some rank appears in exactly three cards.
    ThreeOfAKind,
    /// Some rank appears in exactly two cards.
    TwoOfAKind,
}

impl Pattern {
    /// Evaluation order. The first matching pattern names the hand, so a
    /// flush holding a pair is reported as a flush.
    pub const PRIORITY: [Self; 3] = [Self::Flush, Self::ThreeOfAKind, Self::TwoOfAKind];

    /// Returns whether `cards` match this pattern.
    ///
    /// Flush is false for an empty slice and true for a single card.
    /// The rank patterns only ask whether some group has the exact size,
    /// other groups are not considered.
    #[must_use]
    pub fn is_match(self, cards: &[Card]) -> bool {
        match self {
            Self::Flush => suit_counts(cards).values().any(|&count| count == cards.len()),
            Self::ThreeOfAKind => has_rank_group(cards, 3),
            Self::TwoOfAKind => has_rank_group(cards, 2),
        }
    }

    /// Returns the first pattern in [`Pattern::PRIORITY`] that `cards` match.
    #[must_use]
    pub fn find(cards: &[Card]) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|pattern| pattern.is_match(cards))
    }

    /// Returns the reported name for this pattern.
    #[must_use]
    pub const fn hand_name(self) -> HandName {
        match self {
            Self::Flush => HandName::Flush,
            Self::ThreeOfAKind => HandName::ThreeOfAKind,
            Self::TwoOfAKind => HandName::Pair,
        }
    }
}

fn has_rank_group(cards: &[Card], size: usize) -> bool {
    rank_counts(cards).values().any(|&count| count == size)
}
