use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::viewmodel::{FixedRows, ListPath, MenuList, MenuViewModel, RowGeometry};

use super::ui_fmt;

/// One bordered list on screen
#[derive(Debug, Clone)]
pub struct Pane {
    pub path: ListPath,
    pub area: Rect,
    /// Inner area holding the rows, one cell high each
    pub rows: Rect,
    /// First viewport slot drawn at the top of `rows`. Non-zero only when the
    /// pane is shorter than the viewport and the selection would fall below it.
    pub first_slot: usize,
    /// Arrow region start per visible slot (cycle rows only)
    pub arrow_splits: Vec<Option<u16>>,
}

/// Screen placement of the menu for one frame
#[derive(Debug, Clone)]
pub struct MenuLayout {
    pub header: Rect,
    pub panes: Vec<Pane>,
    pub footer: Rect,
}

impl MenuLayout {
    /// The pane holding the focused list (always the last one)
    pub fn focused_pane(&self) -> Option<&Pane> {
        self.panes.last()
    }
}

impl RowGeometry for MenuLayout {
    fn row_bounds(&self, slot: usize) -> Option<Rect> {
        let pane = self.focused_pane()?;
        let row = slot.checked_sub(pane.first_slot)?;
        FixedRows { origin: pane.rows, row_height: 1 }.row_bounds(row)
    }

    fn arrow_split(&self, slot: usize) -> Option<u16> {
        self.focused_pane()?.arrow_splits.get(slot).copied().flatten()
    }
}

fn pane_for(path: ListPath, list: &MenuList, area: Rect) -> Pane {
    let rows = Block::default().borders(Borders::ALL).inner(area);
    let arrow_splits = list
        .visible_slice()
        .map(|row| {
            let option = row.entry.current_option()?;
            let width = u16::try_from(ui_fmt::text_width(&ui_fmt::cycle_text(option))).ok()?;
            Some(rows.right().saturating_sub(width))
        })
        .collect();
    let height = usize::from(rows.height);
    let first_slot = match list.visible_slice().find(|row| row.selected) {
        Some(row) if height > 0 => (row.slot + 1).saturating_sub(height),
        _ => 0,
    };
    Pane { path, area, rows, first_slot, arrow_splits }
}

/// Compute where the header, list panes and footer go.
///
/// At the top level one pane shows the root list; inside a nested list the
/// parent and the focused list are shown side by side.
pub fn layout(area: Rect, vm: &MenuViewModel) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(0),     // Lists
            Constraint::Length(4),  // Description
        ])
        .split(area);

    let focus = vm.focus_path();
    let mut paths = Vec::with_capacity(2);
    if let Some((_, parent)) = focus.split_last() {
        paths.push(parent.to_vec());
    }
    paths.push(focus.to_vec());

    let constraints = vec![Constraint::Ratio(1, paths.len() as u32); paths.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);

    let panes = paths
        .into_iter()
        .zip(columns.iter())
        .filter_map(|(path, &column)| {
            let list = vm.list_at(&path)?;
            Some(pane_for(path, list, column))
        })
        .collect();

    MenuLayout {
        header: chunks[0],
        panes,
        footer: chunks[2],
    }
}
