use ratatui::style::Color;
use ratatui::text::Span;

use crate::model::{Badge, Entry, EntryKind};

/// Rendered width of a string in terminal cells
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

pub fn badge_glyph(badge: Badge) -> &'static str {
    match badge {
        Badge::Lock => "⊘",
        Badge::Star => "★",
        Badge::Tick => "✔",
        Badge::New => "✚",
        Badge::Warning => "⚠",
    }
}

pub fn badge_color(badge: Badge) -> Color {
    match badge {
        Badge::Lock => Color::DarkGray,
        Badge::Star | Badge::New => Color::Yellow,
        Badge::Tick => Color::Green,
        Badge::Warning => Color::Red,
    }
}

pub fn toggle_marker(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Option text with the arrows that make up the click region
pub fn cycle_text(option: &str) -> String {
    format!("< {} >", option)
}

/// Text drawn at the right edge of a row.
///
/// Cycle rows show only their option so the arrow region ends the row.
pub fn right_text(entry: &Entry) -> String {
    let suffix = match &entry.kind {
        EntryKind::Cycle { .. } => {
            return entry.current_option().map(cycle_text).unwrap_or_default();
        }
        EntryKind::Toggle { checked } => toggle_marker(*checked),
        EntryKind::NestedList { expanded: true, .. } => "▾",
        EntryKind::NestedList { expanded: false, .. } => "▸",
        EntryKind::Plain => "",
    };
    let parts = [
        entry.right_label.as_deref().unwrap_or(""),
        suffix,
        entry.right_badge.map(badge_glyph).unwrap_or(""),
    ];
    parts.iter().filter(|p| !p.is_empty()).copied().collect::<Vec<_>>().join(" ")
}

pub fn right_color(entry: &Entry) -> Color {
    match entry.kind {
        EntryKind::Toggle { checked: true } => Color::Green,
        EntryKind::Toggle { checked: false } => Color::Gray,
        EntryKind::Cycle { .. } => Color::Yellow,
        EntryKind::NestedList { .. } => Color::Cyan,
        EntryKind::Plain => Color::White,
    }
}

/// "selected/count" position indicator
pub fn position(selection: Option<usize>, count: usize) -> String {
    match selection {
        Some(index) => format!("{}/{}", index + 1, count),
        None => "0/0".to_string(),
    }
}
