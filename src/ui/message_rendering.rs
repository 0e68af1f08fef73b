//! Transcript rendering.
//!
//! Assistant replies carry lightweight markup: `**bold**` and `*italic*` spans
//! inside otherwise plain lines. Parsing is kept separate from styling so the
//! span structure can be tested without ANSI sequences.

use chrono::{DateTime, Local, Utc};

use crate::domain::conversation::{Author, ConversationMessage};

use super::styles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
}

/// Splits one line into styled spans. Unclosed markers are kept as text.
pub fn parse_markup_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                flush_plain(&mut plain, &mut spans);
                spans.push(Span::Bold(after[..end].to_owned()));
                rest = &after[end + 2..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix('*') {
            if let Some(end) = after.find('*') {
                flush_plain(&mut plain, &mut spans);
                spans.push(Span::Italic(after[..end].to_owned()));
                rest = &after[end + 1..];
                continue;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            plain.push(ch);
        }
        rest = chars.as_str();
    }

    flush_plain(&mut plain, &mut spans);
    spans
}

/// Header line followed by the message body, ready to print.
pub fn render_message(message: &ConversationMessage) -> Vec<String> {
    let label_style = match message.author() {
        Author::User => styles::user_label_style(),
        Author::Assistant => styles::assistant_label_style(),
    };

    let mut lines = vec![format!(
        "{} {}",
        styles::timestamp_style().apply(format!("[{}]", format_time(message.created_at()))),
        label_style.apply(message.author().label())
    )];

    match message.author() {
        Author::User => lines.push(message.text().to_owned()),
        Author::Assistant => lines.extend(
            message
                .text()
                .lines()
                .map(|line| styled_line(&parse_markup_line(line))),
        ),
    }

    lines
}

pub fn styled_line(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => text.clone(),
            Span::Bold(text) => styles::emphasis_style().apply(text).to_string(),
            Span::Italic(text) => styles::aside_style().apply(text).to_string(),
        })
        .collect()
}

fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

fn flush_plain(plain: &mut String, spans: &mut Vec<Span>) {
    if !plain.is_empty() {
        spans.push(Span::Plain(std::mem::take(plain)));
    }
}
