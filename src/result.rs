//! Round result types.

/// How a blackjack round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player was dealt 21. The dealer's hand is not played.
    PlayerNatural,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 while drawing.
    DealerBust,
    /// Player finished with the higher total, or hit to 21 against a dealer
    /// short of it.
    PlayerHigher,
    /// Dealer finished with the higher total.
    DealerHigher,
    /// Both finished on the same total.
    Tie,
}

impl RoundOutcome {
    /// Returns whether the round counts as a win for the player.
    ///
    /// A tie is awarded to the player rather than treated as a push.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        !matches!(self, Self::PlayerBust | Self::DealerHigher)
    }
}

/// Outcome of a resolved round together with the final totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
