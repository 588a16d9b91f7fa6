//! Poker hand naming with optional `no_std` support.
//!
//! The crate parses a comma-separated list of two-character card tokens
//! (rank symbol then suit symbol) and names the hand as `Flush`,
//! `ThreeOfAKind`, `Pair` or `No Match`, reporting `Error` for input that
//! does not describe a valid hand.
//!
//! # Example
//!
//! ```
//! use handname::{HandName, HandParser};
//!
//! assert_eq!(handname::get_hand_name("AS,AH,AD,7D,KC"), "ThreeOfAKind");
//!
//! let parser = HandParser::default();
//! assert_eq!(parser.hand_name("AS,2H,3D,7C,KC"), HandName::NoMatch);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod convert;
pub mod error;
pub mod hand;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod result;
pub mod split;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use error::ParseError;
pub use hand::Hand;
pub use options::ParserOptions;
pub use parser::{HandParser, get_hand_name};
pub use pattern::Pattern;
pub use result::HandName;
