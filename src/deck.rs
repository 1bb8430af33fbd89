//! The deck: construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::DeckOptions;

/// An ordered stack of undealt cards. The last card is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck with one card per configured suit and rank.
    #[must_use]
    pub fn new(options: &DeckOptions) -> Self {
        let mut cards = Vec::with_capacity(options.card_count());

        for &suit in &options.suits {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        log::debug!("built deck of {} cards", cards.len());
        Self { cards }
    }

    /// Builds an unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&DeckOptions::default())
    }

    /// Wraps an explicit card sequence. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place using the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::debug!("shuffled {} cards", self.cards.len());
    }

    /// Shuffles the deck with a generator freshly seeded from the OS.
    #[cfg(feature = "std")]
    pub fn shuffle_from_entropy(&mut self) {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::from_os_rng();
        self.shuffle(&mut rng);
    }

    /// Draws the top card.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        log::trace!("draw {card:?}");
        card
    }

    /// Moves `count` cards from the top of the deck into `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards
    /// remain. Neither the deck nor the hand is changed in that case.
    pub fn deal_to(&mut self, hand: &mut Hand, count: usize) -> Result<(), DealError> {
        let remaining = self.cards.len();
        if remaining < count {
            return Err(DealError::NotEnoughCards {
                needed: count,
                remaining,
            });
        }

        for card in self.cards.drain(remaining - count..).rev() {
            hand.add_card(card);
        }
        log::debug!("dealt {count} cards, {} remaining", self.cards.len());
        Ok(())
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
