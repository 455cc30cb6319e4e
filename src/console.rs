//! Terminal input and styled output.

use core::str::FromStr;
use core::time::Duration;
use std::io::{BufRead, Write};
use std::thread;

use tracing::trace;

use crate::error::ConsoleError;
use crate::options::TableOptions;

const CLEAR: &str = "\x1b[2J\x1b[1;1H";
const RESET: &str = "\x1b[0m";

/// Foreground colours used at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
}

impl Color {
    const fn code(self) -> &'static str {
        match self {
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Blue => "34",
        }
    }
}

/// A line-oriented terminal.
///
/// Generic over its input and output so a session can be driven from any
/// reader, e.g. a `Cursor` of scripted answers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    options: TableOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub const fn new(input: R, output: W, options: TableOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Returns the presentation options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Wraps `text` in colour sequences when colour is enabled.
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.options.color {
            format!("\x1b[{}m{text}{RESET}", color.code())
        } else {
            text.to_owned()
        }
    }

    /// Clears the screen when clearing is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.options.clear_screen {
            self.output.write_all(CLEAR.as_bytes())?;
        }
        Ok(())
    }

    /// Writes `text` without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` in `color` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn colored_line(&mut self, color: Color, text: &str) -> Result<(), ConsoleError> {
        let painted = self.paint(text, color);
        self.line(&painted)
    }

    /// Writes a numbered option such as `[1] Hit`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn option(&mut self, number: usize, label: &str) -> Result<(), ConsoleError> {
        let marker = self.paint(&format!("[{number}] "), Color::Yellow);
        self.line(&format!("{marker}{label}"))
    }

    /// Reads one line of input with surrounding whitespace removed.
    ///
    /// Pending output is flushed first. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected, so a garbled line is just a bad answer.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;

        let mut input = Vec::new();
        if self.input.read_until(b'\n', &mut input)? == 0 {
            return Err(ConsoleError::Closed);
        }

        let answer = String::from_utf8_lossy(&input).trim().to_owned();
        trace!(%answer, "read input");
        Ok(answer)
    }

    /// Shows the `> ` cursor and parses the answer.
    ///
    /// Returns `None` if the answer does not parse as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt<T: FromStr>(&mut self) -> Result<Option<T>, ConsoleError> {
        let cursor = self.paint("> ", Color::Blue);
        self.write(&cursor)?;
        Ok(self.read_line()?.parse().ok())
    }

    /// Waits for the player to press enter.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn wait_for_enter(&mut self) -> Result<(), ConsoleError> {
        self.colored_line(Color::Blue, "Press <ENTER> to continue playing...")?;
        self.read_line().map(drop)
    }

    /// Flushes output and blocks the thread for `delay`.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn pause(&mut self, delay: Duration) -> Result<(), ConsoleError> {
        self.output.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}
