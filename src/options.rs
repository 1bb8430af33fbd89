//! Deck and round configuration.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{RANKS_PER_SUIT, Suit};

/// Which cards a freshly built deck contains.
///
/// ```
/// use bjdeal::{DeckOptions, Suit};
///
/// let options = DeckOptions::default().with_suits(&[Suit::Spades]);
/// assert_eq!(options.card_count(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Suits to include, in construction order. Each contributes Ace through King.
    pub suits: Vec<Suit>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            suits: Suit::ALL.to_vec(),
        }
    }
}

impl DeckOptions {
    /// Hearts and Diamonds only: the 26-card deck of the first implementation.
    #[must_use]
    pub fn legacy_two_suit() -> Self {
        Self::default().with_suits(&[Suit::Hearts, Suit::Diamonds])
    }

    /// Sets the suits to include.
    #[must_use]
    pub fn with_suits(mut self, suits: &[Suit]) -> Self {
        self.suits = suits.to_vec();
        self
    }

    /// Number of cards a deck built with these options holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.suits.len() * RANKS_PER_SUIT
    }
}

/// Configuration options for a single round.
///
/// ```
/// use bjdeal::{DeckOptions, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_deck(DeckOptions::legacy_two_suit())
///     .with_cards_per_hand(3);
/// assert_eq!(options.cards_per_hand, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Deck composition.
    pub deck: DeckOptions,
    /// Cards dealt to each of the player and the dealer.
    pub cards_per_hand: u8,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            deck: DeckOptions::default(),
            cards_per_hand: 2,
        }
    }
}

impl RoundOptions {
    /// Sets the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckOptions) -> Self {
        self.deck = deck;
        self
    }

    /// Sets how many cards each hand receives.
    #[must_use]
    pub const fn with_cards_per_hand(mut self, cards_per_hand: u8) -> Self {
        self.cards_per_hand = cards_per_hand;
        self
    }
}
