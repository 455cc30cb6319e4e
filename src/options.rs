//! Table presentation options.

use core::time::Duration;

/// Default pause between slot reel frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(250);

/// Presentation options shared by every game at the table.
///
/// None of these change the rules of a game. Use the builder methods to
/// customize them:
///
/// ```
/// use casino::TableOptions;
/// use std::time::Duration;
///
/// let options = TableOptions::default()
///     .with_color(false)
///     .with_frame_delay(Duration::ZERO);
/// assert!(!options.color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Whether ANSI colour sequences are written.
    pub color: bool,
    /// Whether the screen is cleared between views.
    pub clear_screen: bool,
    /// Pause between slot reel frames.
    pub frame_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

impl TableOptions {
    /// Options for non-interactive use: no escape sequences and no delays.
    ///
    /// ```
    /// use casino::TableOptions;
    ///
    /// let options = TableOptions::plain();
    /// assert!(!options.color && !options.clear_screen);
    /// ```
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            frame_delay: Duration::ZERO,
        }
    }

    /// Sets whether colour sequences are written.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets whether the screen is cleared between views.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Sets the pause between slot reel frames.
    ///
    /// # Example
    ///
    /// ```
    /// use casino::TableOptions;
    /// use std::time::Duration;
    ///
    /// let options = TableOptions::default().with_frame_delay(Duration::from_millis(10));
    /// assert_eq!(options.frame_delay, Duration::from_millis(10));
    /// ```
    #[must_use]
    pub const fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }
}
