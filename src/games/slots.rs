//! Three-reel slot machine.

use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::console::Console;
use crate::error::GameError;

use super::GameOutcome;

/// Number of reels on the machine.
pub const REEL_COUNT: usize = 3;

/// Number of symbols on each reel.
pub const SYMBOL_COUNT: usize = 7;

/// Symbols printed on every reel, in their unspun order.
pub const SYMBOLS: [&str; SYMBOL_COUNT] = [
    "\u{1F352}", // cherry
    "\u{1F34B}", // lemon
    "\u{1F514}", // bell
    "\u{1F34A}", // orange
    "\u{2B50}",  // star
    "7",
    "\u{2583}", // bar
];

/// One symbol from each reel.
pub type Frame = [&'static str; REEL_COUNT];

/// The reels after a spin, each an independent permutation of [`SYMBOLS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reels {
    reels: [[&'static str; SYMBOL_COUNT]; REEL_COUNT],
}

impl Reels {
    /// Shuffles every reel with `rng`.
    pub fn spin<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let mut reels = [SYMBOLS; REEL_COUNT];
        for reel in &mut reels {
            reel.shuffle(rng);
        }
        Self { reels }
    }

    /// Returns the symbols of one reel in the order they roll past, or
    /// `None` if `index` is not below [`REEL_COUNT`].
    #[must_use]
    pub fn reel(&self, index: usize) -> Option<&[&'static str; SYMBOL_COUNT]> {
        self.reels.get(index)
    }

    /// Returns every frame of the animation, first frame first.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..SYMBOL_COUNT).map(|row| {
            let [a, b, c] = &self.reels;
            [a[row], b[row], c[row]]
        })
    }
}

/// Draws one frame as a boxed row of three cells.
#[must_use]
pub fn render_frame(frame: Frame) -> [String; 3] {
    let [a, b, c] = frame;
    [
        "┌─────┬─────┬─────┐".to_owned(),
        format!("│ {a}  │ {b}  │ {c}  │"),
        "└─────┴─────┴─────┘".to_owned(),
    ]
}

/// Spins the reels and animates them frame by frame.
///
/// The machine pays nothing, so the outcome is always a loss.
///
/// # Errors
///
/// Returns an error if the terminal fails.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<GameOutcome, GameError> {
    let reels = Reels::spin(&mut ChaCha8Rng::from_os_rng());
    debug!(?reels, "reels spun");
    animate(console, &reels)?;
    Ok(GameOutcome::Loss)
}

/// Prints every frame of `reels`, pausing between frames.
///
/// # Errors
///
/// Returns an error if the terminal fails.
pub fn animate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    reels: &Reels,
) -> Result<(), GameError> {
    let delay = console.options().frame_delay;
    for frame in reels.frames() {
        console.line("")?;
        for line in render_frame(frame) {
            console.line(&line)?;
        }
        console.pause(delay)?;
    }
    Ok(())
}
