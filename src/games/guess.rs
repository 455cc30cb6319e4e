//! Guess the number.

use std::io::{BufRead, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::console::{Color, Console};
use crate::error::GameError;

use super::GameOutcome;

/// Largest number the house can pick. The smallest is 0.
pub const MAX_NUMBER: i16 = 100;

/// Picks a secret number and gives the player one guess.
///
/// # Errors
///
/// Returns an error if the terminal fails or input is closed.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<GameOutcome, GameError> {
    console.clear()?;
    console.colored_line(Color::Red, "====================================")?;
    console.colored_line(Color::Red, "||  Welcome to Guess the Number!  ||")?;
    console.colored_line(Color::Red, "====================================")?;
    console.line("")?;

    console.colored_line(Color::Yellow, "[?] Getting the game ready for you...")?;
    let secret = ChaCha8Rng::from_os_rng().random_range(0..=MAX_NUMBER);
    console.colored_line(Color::Green, "[i] The game is ready!")?;
    console.line("")?;

    play_with_secret(console, secret)
}

/// Asks for a guess and compares it with `secret`.
///
/// Answers that are not a number are asked again.
///
/// # Errors
///
/// Returns an error if the terminal fails or input is closed.
pub fn play_with_secret<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    secret: i16,
) -> Result<GameOutcome, GameError> {
    let guess = loop {
        console.line(&format!("What is your guess? (Max: {MAX_NUMBER})"))?;
        if let Some(guess) = console.prompt::<i16>()? {
            break guess;
        }
        console.colored_line(Color::Red, "Please enter a number.")?;
    };

    let echo = console.paint("You guessed: ", Color::Blue);
    console.line(&format!("{echo}{guess}"))?;
    debug!(guess, secret, "guess submitted");

    console.line("")?;
    console.line("")?;
    if guess == secret {
        console.colored_line(Color::Green, "Congratulations! You guessed the number!")?;
        return Ok(GameOutcome::Win);
    }

    let message = format!(
        "{}{}{}{}",
        console.paint("You lost. ", Color::Red),
        console.paint("The winning number was ", Color::Green),
        console.paint(&secret.to_string(), Color::Blue),
        console.paint(".", Color::Green),
    );
    console.line(&message)?;
    Ok(GameOutcome::Loss)
}
