//! Error types for deck and card operations.

use thiserror::Error;

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck holds fewer cards than the deal asked for.
    #[error("not enough cards in the deck: needed {needed}, {remaining} remaining")]
    NotEnoughCards {
        /// Cards requested by the deal.
        needed: usize,
        /// Cards left in the deck when the deal was attempted.
        remaining: usize,
    },
}

/// Errors that can occur when building cards from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank value outside 1..=13.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
}
