//! The working deck for a single blackjack round.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{CATALOG, Card, DECK_SIZE};
use crate::error::ShoeError;

/// Cards for one round, drawn from the tail.
///
/// A shoe starts out as a copy of [`CATALOG`] and is permuted by
/// [`Shoe::shuffle`]. Draws remove cards, so no catalog entry can come out
/// twice until the shoe is shuffled again.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates an unshuffled shoe holding the full catalog in order.
    ///
    /// The random source is seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: CATALOG.to_vec(),
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Creates a shoe and shuffles it, ready for a round.
    #[must_use]
    pub fn shuffled() -> Self {
        let mut shoe = Self::new();
        shoe.shuffle();
        shoe
    }

    /// Creates a shoe that yields exactly `draws`, first element first.
    ///
    /// Useful for replaying a known round.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Refills the shoe from the catalog and applies a random permutation.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.cards.extend_from_slice(&CATALOG);
        self.cards.shuffle(&mut self.rng);
        trace!(cards = DECK_SIZE, "shoe shuffled");
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if every card has been drawn.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the undrawn cards, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
