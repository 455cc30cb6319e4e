//! Error types for shoe, round and console operations.

use std::io;

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the shoe for the opening hands.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

impl From<ShoeError> for DealError {
    fn from(_: ShoeError) -> Self {
        Self::NotEnoughCards
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting on the player.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The round is not in the dealer's turn.
    #[error("invalid round state for dealer play")]
    InvalidState,
    /// No cards left in the shoe.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors raised by the console while talking to the player.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input was closed before an answer was read.
    #[error("input closed")]
    Closed,
    /// Reading or writing the terminal failed.
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}

/// Errors that end a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal failed or input was closed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
    /// The opening hands could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer could not finish their hand.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// Play stopped before the round reached a result.
    #[error("round ended without a result")]
    Unresolved,
}

impl GameError {
    /// Returns whether the session ended because input was closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Console(ConsoleError::Closed))
    }
}
