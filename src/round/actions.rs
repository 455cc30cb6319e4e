use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::RoundOutcome;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 resolves the round as a loss. Reaching 21 wins on the
    /// spot against the dealer's opening hand, unless the dealer holds 21
    /// too, in which case the dealer's turn settles it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn or the shoe
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        debug!(?card, player_value = value, "player hits");

        if value > BLACKJACK {
            self.resolve(RoundOutcome::PlayerBust);
        } else if value == BLACKJACK {
            if self.dealer.value() == BLACKJACK {
                self.state = RoundState::DealerTurn;
            } else {
                self.resolve(RoundOutcome::PlayerHigher);
            }
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(player_value = self.player.value(), "player stands");
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
