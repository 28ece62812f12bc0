use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::Entry;
use crate::viewmodel::{MenuList, MenuViewModel};

use super::layout::{MenuLayout, Pane};
use super::ui_fmt;

const HIGHLIGHT_SYMBOL: &str = "» ";

pub fn render(frame: &mut Frame, vm: &MenuViewModel, layout: &MenuLayout) {
    render_header(frame, vm, layout.header);
    for pane in &layout.panes {
        if let Some(list) = vm.list_at(&pane.path) {
            render_list(frame, vm, list, pane);
        }
    }
    render_footer(frame, vm.focused_list(), layout.footer);
}

fn render_header(frame: &mut Frame, vm: &MenuViewModel, area: Rect) {
    let mut spans = vec![Span::styled(
        vm.title().to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    for label in vm.breadcrumb() {
        spans.push(Span::raw(" › "));
        spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Cyan)));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("overlay-menu"));
    frame.render_widget(header, area);
}

fn row_line(entry: &Entry, width: usize, dimmed: bool) -> Line<'static> {
    let mut left = Vec::with_capacity(3);
    if let Some(badge) = entry.left_badge {
        left.push(Span::styled(
            format!("{} ", ui_fmt::badge_glyph(badge)),
            Style::default().fg(ui_fmt::badge_color(badge)),
        ));
    }
    let label_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    left.push(Span::styled(entry.label.clone(), label_style));

    let right = ui_fmt::right_text(entry);
    let used: usize = left.iter().map(Span::width).sum::<usize>() + ui_fmt::text_width(&right);
    let pad = width.saturating_sub(used).max(1);

    left.push(Span::raw(" ".repeat(pad)));
    left.push(Span::styled(right, Style::default().fg(ui_fmt::right_color(entry))));
    Line::from(left)
}

fn render_list(frame: &mut Frame, vm: &MenuViewModel, list: &MenuList, pane: &Pane) {
    let focused = list.is_focused();

    let content_width =
        usize::from(pane.rows.width).saturating_sub(ui_fmt::text_width(HIGHLIGHT_SYMBOL));

    // Start at the pane's first slot; the widget itself must not scroll
    let items: Vec<ListItem> = list
        .visible_slice()
        .skip(pane.first_slot)
        .take(usize::from(pane.rows.height))
        .map(|row| ListItem::new(row_line(row.entry, content_width, !focused)))
        .collect();
    let selected_row = list
        .visible_slice()
        .find(|row| row.selected)
        .and_then(|row| row.slot.checked_sub(pane.first_slot));

    let title = match pane.path.split_last() {
        Some((&index, parent)) => vm
            .list_at(parent)
            .and_then(|p| p.entry(index))
            .map(|e| e.label.clone())
            .unwrap_or_default(),
        None => "Menu".to_string(),
    };
    let title = format!("{} ({})", title, ui_fmt::position(list.selection(), list.count()));

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut list_state = ListState::default()
        .with_offset(0)
        .with_selected(selected_row);

    let widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(title))
        .highlight_style(highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    frame.render_stateful_widget(widget, pane.area, &mut list_state);
}

fn render_footer(frame: &mut Frame, list: &MenuList, area: Rect) {
    let description = list
        .selected_entry()
        .and_then(|e| e.description.clone())
        .unwrap_or_default();

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(description, Style::default().fg(Color::White))),
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" nav  "),
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(" option  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" back  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
