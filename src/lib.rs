//! A terminal casino: blackjack, a slot machine and guess-the-number behind
//! a text menu.
//!
//! The blackjack engine is usable on its own. A [`Round`] owns its [`Shoe`]
//! and both hands and moves through [`RoundState`] as the player hits or
//! stands and the dealer plays out.
//!
//! # Example
//!
//! ```
//! use casino::{Card, Rank, Round, RoundOutcome, Shoe, Suit};
//!
//! let shoe = Shoe::from_draws(&[
//!     Card::new(Rank::Ten, Suit::Clubs),    // dealer
//!     Card::new(Rank::Seven, Suit::Clubs),  // dealer
//!     Card::new(Rank::Ten, Suit::Hearts),   // player
//!     Card::new(Rank::Nine, Suit::Hearts),  // player
//! ]);
//! let mut round = Round::deal(shoe).unwrap();
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//! assert_eq!(round.result().unwrap().outcome, RoundOutcome::PlayerHigher);
//! ```

pub mod card;
pub mod casino;
pub mod console;
pub mod error;
pub mod games;
pub mod hand;
pub mod options;
pub mod render;
pub mod result;
pub mod round;
pub mod shoe;

// Re-export main types
pub use card::{CATALOG, Card, DECK_SIZE, Rank, Suit};
pub use casino::{Casino, MenuChoice};
pub use console::{Color, Console};
pub use error::{ActionError, ConsoleError, DealError, DealerError, GameError, ShoeError};
pub use games::GameOutcome;
pub use hand::{BLACKJACK, Hand, score};
pub use options::TableOptions;
pub use render::{render_card, render_hand, render_hidden_card};
pub use result::{RoundOutcome, RoundResult};
pub use round::{DEALER_STANDS_ON, Round, RoundState};
pub use shoe::Shoe;
