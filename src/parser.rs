//! Hand parsing and classification.

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::ParseError;
use crate::hand::Hand;
use crate::options::ParserOptions;
use crate::pattern::Pattern;
use crate::result::HandName;
use crate::split::Splitter;

/// Turns input lines into hands and names them.
///
/// A parser holds no per-call state and can be shared freely.
///
/// # Example
///
/// ```
/// use handname::{HandName, HandParser};
///
/// let parser = HandParser::default();
/// assert_eq!(parser.hand_name("AS,AH,4D,7D,KC"), HandName::Pair);
/// assert_eq!(parser.hand_name("A,AH,4D,7D,KC"), HandName::Error);
/// ```
#[derive(Debug, Clone)]
pub struct HandParser {
    splitter: Splitter,
    options: ParserOptions,
}

impl HandParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            splitter: Splitter::new(options.delimiters.clone()),
            options,
        }
    }

    /// Returns the parser options.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `input` into a hand.
    ///
    /// Every token is length-checked before any symbol is converted, and
    /// conversion stops at the first unknown symbol.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if any token is malformed, the hand has
    /// fewer than [`ParserOptions::min_cards`] cards, or five cards share
    /// one rank.
    pub fn parse(&self, input: &str) -> Result<Hand, ParseError> {
        if let Some(token) = self
            .splitter
            .split(input)
            .find(|token| token.chars().count() != 2)
        {
            return Err(ParseError::InvalidTokenLength {
                length: token.chars().count(),
            });
        }

        let mut hand = Hand::new();
        for token in self.splitter.split(input) {
            let card = Card::from_token(token)?;
            trace!(token, %card, "converted token");
            hand.add_card(card);
        }

        if hand.len() < self.options.min_cards {
            return Err(ParseError::TooFewCards {
                count: hand.len(),
                minimum: self.options.min_cards,
            });
        }

        if let Some((&rank, _)) = hand.rank_counts().iter().find(|&(_, &count)| count == 5) {
            return Err(ParseError::FiveOfAKind(rank));
        }

        Ok(hand)
    }

    /// Parses `input` and returns the highest-priority pattern it matches.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] under the same conditions as
    /// [`HandParser::parse`].
    pub fn classify(&self, input: &str) -> Result<Option<Pattern>, ParseError> {
        let hand = self.parse(input)?;
        let pattern = Pattern::find(hand.cards());
        debug!(cards = hand.len(), ?pattern, "classified hand");
        Ok(pattern)
    }

    /// Names the hand in `input`. Never fails: any parse error yields
    /// [`HandName::Error`].
    #[must_use]
    pub fn hand_name(&self, input: &str) -> HandName {
        match self.classify(input) {
            Ok(Some(pattern)) => pattern.hand_name(),
            Ok(None) => HandName::NoMatch,
            Err(error) => {
                debug!(%error, input, "rejected hand");
                HandName::Error
            }
        }
    }
}

impl Default for HandParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

/// Names the hand in `input` using default options.
///
/// Returns one of `"Flush"`, `"ThreeOfAKind"`, `"Pair"`, `"No Match"` or
/// `"Error"`.
///
/// ```
/// assert_eq!(handname::get_hand_name("AS,3S,5S,9S,KS"), "Flush");
/// ```
#[must_use]
pub fn get_hand_name(input: &str) -> &'static str {
    HandParser::default().hand_name(input).as_str()
}
