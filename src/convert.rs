//! Symbol lookup tables.

use crate::card::{Rank, Suit};

/// Rank symbols. Note the `t` and `O` aliases.
pub const RANK_SYMBOLS: &[(char, Rank)] = &[
    ('A', Rank::Ace),
    ('2', Rank::Two),
    ('3', Rank::Three),
    ('4', Rank::Four),
    ('5', Rank::Five),
    ('6', Rank::Six),
    ('7', Rank::Seven),
    ('8', Rank::Eight),
    ('9', Rank::Nine),
    ('T', Rank::Ten),
    ('t', Rank::Ten),
    ('J', Rank::Jack),
    ('Q', Rank::Queen),
    ('O', Rank::Queen),
    ('K', Rank::King),
];

/// Suit symbols. Case-sensitive.
pub const SUIT_SYMBOLS: &[(char, Suit)] = &[
    ('S', Suit::Spades),
    ('D', Suit::Diamonds),
    ('H', Suit::Hearts),
    ('C', Suit::Clubs),
];

/// Looks `input` up in `table`, returning `None` when it has no entry.
///
/// ```
/// use handname::convert::{SUIT_SYMBOLS, convert};
/// use handname::Suit;
///
/// assert_eq!(convert('H', SUIT_SYMBOLS), Some(Suit::Hearts));
/// assert_eq!(convert('h', SUIT_SYMBOLS), None);
/// ```
#[must_use]
pub fn convert<A, B>(input: A, table: &[(A, B)]) -> Option<B>
where
    A: PartialEq + Copy,
    B: Copy,
{
    table
        .iter()
        .find_map(|(symbol, value)| (*symbol == input).then_some(*value))
}
