//! Blackjack at the terminal.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::{Color, Console};
use crate::error::GameError;
use crate::render::render_hand;
use crate::result::{RoundOutcome, RoundResult};
use crate::round::{Round, RoundState};
use crate::shoe::Shoe;

use super::GameOutcome;

/// House rule shown after the deal.
pub const DEALER_NOTICE: &str = "Dealer must stand on 17 and must draw to 16.";

/// A choice offered during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl PlayerAction {
    /// Maps a numbered menu answer to an action.
    #[must_use]
    pub const fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Hit),
            2 => Some(Self::Stand),
            _ => None,
        }
    }
}

/// Plays one round with a freshly shuffled shoe.
///
/// # Errors
///
/// Returns an error if the terminal fails or input is closed.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<GameOutcome, GameError> {
    console.clear()?;
    console.colored_line(Color::Yellow, "[?] Shuffling the deck...")?;
    let shoe = Shoe::shuffled();
    console.colored_line(Color::Green, "[i] The deck has been shuffled!")?;
    console.line("")?;

    play_with_shoe(console, shoe)
}

/// Plays one round dealt from `shoe` as it stands.
///
/// # Errors
///
/// Returns an error if the terminal fails, input is closed, or the shoe runs
/// out of cards.
pub fn play_with_shoe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shoe: Shoe,
) -> Result<GameOutcome, GameError> {
    let mut round = Round::deal(shoe)?;
    let resolved_at_deal = round.state() == RoundState::Resolved;

    show_table(console, &round)?;
    console.line("")?;
    console.colored_line(Color::Blue, DEALER_NOTICE)?;
    console.line("")?;

    while round.state() == RoundState::PlayerTurn {
        match prompt_action(console)? {
            PlayerAction::Hit => {
                console.clear()?;
                round.hit()?;
                if round.state() == RoundState::PlayerTurn {
                    show_table(console, &round)?;
                }
            }
            PlayerAction::Stand => round.stand()?,
        }
    }

    if round.state() == RoundState::DealerTurn {
        console.clear()?;
        round.dealer_play()?;
    }

    let result = round.result().ok_or(GameError::Unresolved)?;
    if resolved_at_deal {
        console.clear()?;
    }
    show_table(console, &round)?;
    announce(console, result)?;

    info!(outcome = ?result.outcome, "blackjack round finished");
    Ok(result.outcome.is_player_win().into())
}

fn prompt_action<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<PlayerAction, GameError> {
    loop {
        console.line("What would you like to do?")?;
        console.option(1, "Hit")?;
        console.option(2, "Stand")?;

        if let Some(action) = console.prompt::<u32>()?.and_then(PlayerAction::from_choice) {
            return Ok(action);
        }
        console.colored_line(Color::Red, "Invalid choice. Please try again.")?;
    }
}

fn show_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    round: &Round,
) -> Result<(), GameError> {
    console.colored_line(Color::Red, "Dealer's Hand:")?;
    for line in render_hand(round.dealer().cards(), round.is_hole_hidden()) {
        console.line(&line)?;
    }

    console.line("")?;
    console.colored_line(Color::Green, "Your Hand:")?;
    for line in render_hand(round.player().cards(), false) {
        console.line(&line)?;
    }

    Ok(())
}

fn announce<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: RoundResult,
) -> Result<(), GameError> {
    let (color, head, first, compared) = match result.outcome {
        RoundOutcome::PlayerBust => (
            Color::Red,
            "You busted! Your score is ",
            result.player_value,
            false,
        ),
        RoundOutcome::DealerBust => (
            Color::Green,
            "You win! Dealer busted! Their score is ",
            result.dealer_value,
            false,
        ),
        RoundOutcome::PlayerNatural | RoundOutcome::PlayerHigher => (
            Color::Green,
            "You win! Your score is ",
            result.player_value,
            true,
        ),
        RoundOutcome::DealerHigher => (
            Color::Red,
            "You lost. Your score is ",
            result.player_value,
            true,
        ),
        RoundOutcome::Tie => (
            Color::Green,
            "It's a tie! Your score is ",
            result.player_value,
            true,
        ),
    };

    let mut message = console.paint(head, color);
    message.push_str(&console.paint(&first.to_string(), Color::Blue));
    if compared {
        message.push_str(&console.paint(" and the dealer's score is ", color));
        message.push_str(&console.paint(&result.dealer_value.to_string(), Color::Blue));
    }
    message.push_str(&console.paint(".", color));

    console.line("")?;
    console.line("")?;
    console.line(&message)?;
    Ok(())
}
