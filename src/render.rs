//! ASCII-art card rendering.
//!
//! Every card is a fixed box of [`CARD_HEIGHT`] lines, each [`CARD_WIDTH`]
//! characters wide, so hands can be laid out side by side row by row.

use crate::card::Card;

/// Number of lines in a rendered card.
pub const CARD_HEIGHT: usize = 7;

/// Number of characters in each line of a rendered card.
pub const CARD_WIDTH: usize = 10;

/// A rendered card, top line first.
pub type CardArt = [String; CARD_HEIGHT];

const TOP: &str = "┌────────┐";
const BLANK: &str = "│        │";
const SHADED: &str = "│░░░░░░░░│";
const BOTTOM: &str = "└────────┘";

/// Two-column value field for the bottom border, e.g. `"7─"` or `"10"`.
fn value_field(value: u8) -> String {
    if value < 10 {
        format!("{value}─")
    } else {
        value.to_string()
    }
}

/// Renders a face-up card.
///
/// The rank sits in the top-left and bottom-right corners, the suit in the
/// middle, and the card's value is embedded in the bottom border.
#[must_use]
pub fn render_card(card: &Card) -> CardArt {
    let rank = card.rank.label();

    [
        TOP.to_owned(),
        format!("│{rank:<2}      │"),
        BLANK.to_owned(),
        format!("│   {}    │", card.suit.glyph()),
        BLANK.to_owned(),
        format!("│      {rank:>2}│"),
        format!("└───{}───┘", value_field(card.value())),
    ]
}

/// Renders a face-down card.
#[must_use]
pub fn render_hidden_card() -> CardArt {
    [
        TOP.to_owned(),
        SHADED.to_owned(),
        SHADED.to_owned(),
        SHADED.to_owned(),
        SHADED.to_owned(),
        SHADED.to_owned(),
        BOTTOM.to_owned(),
    ]
}

/// Renders a hand as lines of side-by-side cards.
///
/// With `first_round` set, the second card is drawn face down. Each card is
/// followed by a single space. An empty hand renders no lines.
#[must_use]
pub fn render_hand(cards: &[Card], first_round: bool) -> Vec<String> {
    if cards.is_empty() {
        return Vec::new();
    }

    let arts: Vec<CardArt> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if first_round && index == 1 {
                render_hidden_card()
            } else {
                render_card(card)
            }
        })
        .collect();

    (0..CARD_HEIGHT)
        .map(|row| {
            arts.iter().fold(String::new(), |mut line, art| {
                line.push_str(&art[row]);
                line.push(' ');
                line
            })
        })
        .collect()
}
