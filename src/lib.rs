//! Deck, hand, and single-round deal simulation with optional `no_std` support.
//!
//! The crate builds a deck, shuffles it, deals a player and a dealer, and
//! scores each hand blackjack-style (aces 1 or 11, face cards 10). There is
//! no betting and no hit or stand decision; a [`Round`] is one deal.
//!
//! # Example
//!
//! ```
//! use bjdeal::{Round, RoundOptions};
//!
//! let mut round = Round::new(RoundOptions::default(), 7);
//! let summary = round.play().unwrap();
//! println!("{summary}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError};
pub use hand::Hand;
pub use options::{DeckOptions, RoundOptions};
pub use round::{Round, RoundSummary};
