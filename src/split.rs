//! Input tokenizer.

use alloc::vec::Vec;

/// Splits input on a configurable set of delimiter characters, dropping
/// empty fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Splitter {
    delimiters: Vec<char>,
}

impl Splitter {
    /// Creates a splitter with the given delimiters.
    #[must_use]
    pub const fn new(delimiters: Vec<char>) -> Self {
        Self { delimiters }
    }

    /// Adds another delimiter.
    pub fn add_delimiter(&mut self, delimiter: char) {
        self.delimiters.push(delimiter);
    }

    /// Returns the configured delimiters.
    #[must_use]
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Splits `input`, skipping empty fragments.
    ///
    /// With no delimiters configured a non-empty input comes back whole.
    ///
    /// ```
    /// use handname::split::Splitter;
    ///
    /// let splitter = Splitter::new(vec![',']);
    /// let tokens: Vec<&str> = splitter.split(",AS,,KH,").collect();
    /// assert_eq!(tokens, ["AS", "KH"]);
    /// ```
    pub fn split<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        input
            .split(|c: char| self.delimiters.contains(&c))
            .filter(|token| !token.is_empty())
    }
}
