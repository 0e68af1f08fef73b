//! Terminal styles for the chat transcript.

use crossterm::style::{Color, ContentStyle, Stylize};

/// `**bold**` spans in assistant replies.
pub fn emphasis_style() -> ContentStyle {
    ContentStyle::new().bold()
}

/// `*italic*` spans in assistant replies.
pub fn aside_style() -> ContentStyle {
    ContentStyle::new().italic()
}

pub fn user_label_style() -> ContentStyle {
    ContentStyle::new().with(Color::Blue).bold()
}

pub fn assistant_label_style() -> ContentStyle {
    ContentStyle::new().with(Color::Magenta).bold()
}

pub fn timestamp_style() -> ContentStyle {
    ContentStyle::new().with(Color::DarkGrey)
}

pub fn hint_style() -> ContentStyle {
    ContentStyle::new().with(Color::DarkGrey)
}
