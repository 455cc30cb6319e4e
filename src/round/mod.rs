//! Blackjack round controller.

use tracing::debug;

use crate::card::Card;
use crate::error::{DealError, ShoeError};
use crate::hand::{BLACKJACK, Hand};
use crate::result::{RoundOutcome, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Minimum total the dealer stands on.
pub const DEALER_STANDS_ON: u8 = 17;

/// A single blackjack round between one player and the dealer.
///
/// The round owns its shoe and both hands. Drive it with [`Round::hit`],
/// [`Round::stand`] and [`Round::dealer_play`] until [`Round::result`]
/// returns `Some`.
#[derive(Debug, Clone)]
pub struct Round {
    shoe: Shoe,
    dealer: Hand,
    player: Hand,
    state: RoundState,
    result: Option<RoundResult>,
}

impl Round {
    /// Deals the opening hands from `shoe`: two cards to the dealer, then two
    /// to the player.
    ///
    /// A player natural resolves the round on the spot as a win. If the
    /// dealer also holds 21 it is recorded as a tie, which still counts as a
    /// win.
    ///
    /// # Example
    ///
    /// ```
    /// use casino::{Round, Shoe};
    ///
    /// let round = Round::deal(Shoe::shuffled()).unwrap();
    /// assert_eq!(round.player().len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out while dealing.
    pub fn deal(shoe: Shoe) -> Result<Self, DealError> {
        let mut round = Self {
            shoe,
            dealer: Hand::new(),
            player: Hand::new(),
            state: RoundState::Dealing,
            result: None,
        };

        for _ in 0..2 {
            let card = round.shoe.draw()?;
            round.dealer.add_card(card);
        }
        for _ in 0..2 {
            let card = round.shoe.draw()?;
            round.player.add_card(card);
        }

        debug!(
            player_value = round.player.value(),
            dealer_value = round.dealer.value(),
            "opening hands dealt"
        );

        if round.player.is_natural() {
            if round.dealer.value() == BLACKJACK {
                round.resolve(RoundOutcome::Tie);
            } else {
                round.resolve(RoundOutcome::PlayerNatural);
            }
        } else {
            round.state = RoundState::PlayerTurn;
        }

        Ok(round)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the dealer's hole card should still be face down.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.state != RoundState::Resolved
    }

    /// Returns the result once the round is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    fn draw(&mut self) -> Result<Card, ShoeError> {
        self.shoe.draw()
    }

    fn resolve(&mut self, outcome: RoundOutcome) {
        let result = RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };
        debug!(
            ?outcome,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            "round resolved"
        );
        self.result = Some(result);
        self.state = RoundState::Resolved;
    }
}
