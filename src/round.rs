//! Single-round orchestration.

use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::RoundOptions;

/// A single deal: one deck, one player hand, one dealer hand.
///
/// The round owns its random generator so the shuffle can be reproduced
/// from a seed.
pub struct Round {
    /// Round options.
    pub options: RoundOptions,
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a round whose shuffle is determined by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdeal::{Round, RoundOptions};
    ///
    /// let mut round = Round::new(RoundOptions::default(), 42);
    /// let summary = round.play().unwrap();
    /// assert!((4..=21).contains(&summary.player_value()));
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a round seeded from the OS.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy(options: RoundOptions) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Builds and shuffles a fresh deck, then deals the player followed by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck cannot cover both hands.
    pub fn play(&mut self) -> Result<RoundSummary, DealError> {
        let mut deck = Deck::new(&self.options.deck);
        deck.shuffle(&mut self.rng);
        self.deal(deck)
    }

    /// Deals both hands from an already prepared deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck cannot cover both hands.
    pub fn deal(&self, mut deck: Deck) -> Result<RoundSummary, DealError> {
        let count = usize::from(self.options.cards_per_hand);
        let needed = count * 2;
        if deck.len() < needed {
            return Err(DealError::NotEnoughCards {
                needed,
                remaining: deck.len(),
            });
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        deck.deal_to(&mut player, count)?;
        deck.deal_to(&mut dealer, count)?;

        log::debug!("player [{player}] = {}", player.value());
        log::debug!("dealer [{dealer}] = {}", dealer.value());

        Ok(RoundSummary {
            player,
            dealer,
            cards_remaining: deck.len(),
        })
    }
}

/// Outcome of a round: both hands and what was left in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Cards left in the deck after dealing.
    pub cards_remaining: usize,
}

impl RoundSummary {
    /// The player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.player.value()
    }

    /// The dealer's hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.dealer.value()
    }
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player hand value: {}", self.player_value())?;
        write!(f, "Dealer hand value: {}", self.dealer_value())
    }
}
