//! The casino menu loop.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::{Color, Console};
use crate::error::{ConsoleError, GameError};
use crate::games::{GameOutcome, blackjack, guess, slots};

/// An entry on the casino menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Guess the number.
    GuessTheNumber,
    /// Roulette. Not open yet; picking it returns to the menu.
    Roulette,
    /// Slot machine.
    Slots,
    /// Blackjack.
    Blackjack,
    /// Leave the casino.
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [Self; 5] = [
        Self::GuessTheNumber,
        Self::Roulette,
        Self::Slots,
        Self::Blackjack,
        Self::Exit,
    ];

    /// Returns the text shown on the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GuessTheNumber => "Guess the Number",
            Self::Roulette => "Roulette",
            Self::Slots => "Slots",
            Self::Blackjack => "Blackjack",
            Self::Exit => "Exit",
        }
    }

    /// Maps a 1-based menu number to its entry.
    #[must_use]
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

/// The casino: shows the menu and runs games until the player leaves.
#[derive(Debug)]
pub struct Casino<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Casino<R, W> {
    /// Creates a casino talking through `console`.
    pub const fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    /// Consumes the casino and returns its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the menu loop until the player picks Exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or input is closed.
    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            self.console.clear()?;
            let choice = self.choose()?;
            info!(?choice, "menu selection");

            if let Some(outcome) = self.play(choice)? {
                info!(won = outcome.is_win(), "game finished");
                self.console.wait_for_enter()?;
            } else if choice == MenuChoice::Exit {
                self.console.clear()?;
                self.console.line("")?;
                self.console
                    .colored_line(Color::Green, "Thanks for playing! Goodbye!")?;
                return Ok(());
            }
        }
    }

    /// Runs the game behind `choice`.
    ///
    /// Returns `None` for entries that are not games.
    ///
    /// # Errors
    ///
    /// Returns an error if the game fails.
    pub fn play(&mut self, choice: MenuChoice) -> Result<Option<GameOutcome>, GameError> {
        let outcome = match choice {
            MenuChoice::GuessTheNumber => guess::play(&mut self.console)?,
            MenuChoice::Slots => slots::play(&mut self.console)?,
            MenuChoice::Blackjack => blackjack::play(&mut self.console)?,
            MenuChoice::Roulette | MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(outcome))
    }

    /// Shows the menu until a valid entry is picked.
    fn choose(&mut self) -> Result<MenuChoice, ConsoleError> {
        loop {
            self.console
                .colored_line(Color::Red, "==============================")?;
            self.console
                .colored_line(Color::Red, "||  Welcome to the Casino!  ||")?;
            self.console
                .colored_line(Color::Red, "==============================")?;
            self.console.line("")?;

            for (index, choice) in MenuChoice::ALL.iter().enumerate() {
                self.console.option(index + 1, choice.label())?;
            }

            self.console.line("What would you like to play? ")?;
            if let Some(choice) = self
                .console
                .prompt::<usize>()?
                .and_then(MenuChoice::from_choice)
            {
                return Ok(choice);
            }
            self.console.clear()?;
        }
    }
}
