//! Card types and symbol parsing.

use core::fmt;
use core::str::FromStr;

use crate::convert::{RANK_SYMBOLS, SUIT_SYMBOLS, convert};
use crate::error::ParseError;

/// Card rank.
///
/// Ranks are only compared for identity when grouping cards; no ordering is
/// implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Looks up the rank for a symbol.
    ///
    /// `T` and `t` both name Ten, `Q` and `O` both name Queen.
    ///
    /// ```
    /// use handname::Rank;
    ///
    /// assert_eq!(Rank::from_symbol('O'), Some(Rank::Queen));
    /// assert_eq!(Rank::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        convert(symbol, RANK_SYMBOLS)
    }

    /// Returns the canonical symbol for this rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Looks up the suit for a symbol. Only uppercase `S`, `D`, `H` and `C`
    /// are recognized.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        convert(symbol, SUIT_SYMBOLS)
    }

    /// Returns the symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Parses a two-character token: rank symbol first, suit symbol second.
    ///
    /// The rank is checked before the suit, so a token bad in both places
    /// reports the rank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTokenLength`] if the token is not exactly
    /// two characters, or [`ParseError::UnknownRank`] /
    /// [`ParseError::UnknownSuit`] if a symbol is not recognized.
    pub fn from_token(token: &str) -> Result<Self, ParseError> {
        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::InvalidTokenLength {
                length: token.chars().count(),
            });
        };

        let rank = Rank::from_symbol(rank).ok_or(ParseError::UnknownRank(rank))?;
        let suit = Suit::from_symbol(suit).ok_or(ParseError::UnknownSuit(suit))?;
        Ok(Self::new(suit, rank))
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}
