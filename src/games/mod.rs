//! Interactive games offered at the table.

pub mod blackjack;
pub mod guess;
pub mod slots;

/// Whether the player came out ahead in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
}

impl GameOutcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

impl From<bool> for GameOutcome {
    fn from(won: bool) -> Self {
        if won { Self::Win } else { Self::Loss }
    }
}
