//! Parser configuration options.

use alloc::vec;
use alloc::vec::Vec;

/// Configuration options for a [`HandParser`](crate::HandParser).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handname::ParserOptions;
///
/// let options = ParserOptions::default()
///     .with_delimiters(vec![',', ' '])
///     .with_min_cards(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Characters that separate card tokens.
    pub delimiters: Vec<char>,
    /// Fewest cards a hand may hold.
    pub min_cards: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            delimiters: vec![','],
            min_cards: 2,
        }
    }
}

impl ParserOptions {
    /// Sets the token delimiters.
    ///
    /// # Example
    ///
    /// ```
    /// use handname::ParserOptions;
    ///
    /// let options = ParserOptions::default().with_delimiters(vec![';']);
    /// assert_eq!(options.delimiters, [';']);
    /// ```
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Adds one more token delimiter.
    ///
    /// # Example
    ///
    /// ```
    /// use handname::ParserOptions;
    ///
    /// let options = ParserOptions::default().with_delimiter(' ');
    /// assert_eq!(options.delimiters, [',', ' ']);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiters.push(delimiter);
        self
    }

    /// Sets the minimum number of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use handname::ParserOptions;
    ///
    /// let options = ParserOptions::default().with_min_cards(5);
    /// assert_eq!(options.min_cards, 5);
    /// ```
    #[must_use]
    pub const fn with_min_cards(mut self, min_cards: usize) -> Self {
        self.min_cards = min_cards;
        self
    }
}
