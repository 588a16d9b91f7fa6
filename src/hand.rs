//! Parsed hand representation.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};

fn group_sizes<K, F>(cards: &[Card], key: F) -> HashMap<K, usize>
where
    K: Eq + core::hash::Hash,
    F: Fn(&Card) -> K,
{
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(key(card)).or_insert(0) += 1;
    }
    counts
}

/// Number of cards of each rank present in `cards`.
#[must_use]
pub fn rank_counts(cards: &[Card]) -> HashMap<Rank, usize> {
    group_sizes(cards, |card| card.rank)
}

/// Number of cards of each suit present in `cards`.
#[must_use]
pub fn suit_counts(cards: &[Card]) -> HashMap<Suit, usize> {
    group_sizes(cards, |card| card.suit)
}

/// An ordered list of cards parsed from one input line.
///
/// Duplicate cards are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in input order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Group sizes by rank.
    #[must_use]
    pub fn rank_counts(&self) -> HashMap<Rank, usize> {
        rank_counts(&self.cards)
    }

    /// Group sizes by suit.
    #[must_use]
    pub fn suit_counts(&self) -> HashMap<Suit, usize> {
        suit_counts(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
