use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::DealerError;
use crate::result::RoundOutcome;

use super::{DEALER_STANDS_ON, Round, RoundState};

impl Round {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while below 17 and stands on 17 or higher, soft or
    /// hard. A bust resolves the round as a player win; otherwise the totals
    /// are compared and a tie goes to the player.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn or the shoe
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            debug!(?card, dealer_value = self.dealer.value(), "dealer draws");

            if self.dealer.is_bust() {
                self.resolve(RoundOutcome::DealerBust);
                return Ok(drawn_cards);
            }
        }

        let outcome = match self.player.value().cmp(&self.dealer.value()) {
            Ordering::Greater => RoundOutcome::PlayerHigher,
            Ordering::Less => RoundOutcome::DealerHigher,
            Ordering::Equal => RoundOutcome::Tie,
        };
        self.resolve(outcome);

        Ok(drawn_cards)
    }
}
