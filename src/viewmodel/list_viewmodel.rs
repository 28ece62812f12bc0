use crate::error::{MenuError, Result};
use crate::model::{Entry, EntryKind};

use super::events::ListEvent;
use super::geometry::{hit_slot, RowGeometry, RowRegion};
use super::selection::{self, Step, Viewport};

/// Visible row handed to the render layer
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    /// Position in the list
    pub index: usize,
    /// Position inside the viewport
    pub slot: usize,
    pub entry: &'a Entry,
    pub selected: bool,
}

/// Windowed circular selection list.
///
/// Holds entries, the selected index and a viewport of at most `capacity`
/// rows that always contains the selection.
#[derive(Debug, Clone)]
pub struct MenuList {
    entries: Vec<Entry>,
    capacity: usize,
    selected_index: usize,
    viewport: Viewport,
    focused: bool,
}

impl MenuList {
    /// Create an empty list showing at most `capacity` rows (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            selected_index: 0,
            viewport: Viewport::default(),
            focused: false,
        }
    }

    /// Build a list from entries, refreshed and ready to navigate
    pub fn with_entries(capacity: usize, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut list = Self::new(capacity);
        list.entries.extend(entries);
        list.refresh();
        list
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected index, `None` for an empty list
    pub fn selection(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected_index)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Lists owned by nested entries, in entry order
    pub(crate) fn sublists_mut(&mut self) -> impl Iterator<Item = &mut MenuList> + '_ {
        self.entries.iter_mut().filter_map(Entry::sublist_mut)
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selection().and_then(|i| self.entries.get(i))
    }

    fn selected_entry_mut(&mut self) -> Option<&mut Entry> {
        let index = self.selection()?;
        self.entries.get_mut(index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection() == Some(index)
    }

    /// Rows inside the viewport, top to bottom
    pub fn visible_slice(&self) -> impl Iterator<Item = VisibleRow<'_>> + '_ {
        let start = self.viewport.min_index;
        self.entries[start..self.viewport.end()]
            .iter()
            .enumerate()
            .map(move |(slot, entry)| VisibleRow {
                index: start + slot,
                slot,
                entry,
                selected: start + slot == self.selected_index,
            })
    }

    // --- Navigation ---

    pub fn move_next(&mut self) -> Option<ListEvent> {
        self.step(Step::Next)
    }

    pub fn move_prev(&mut self) -> Option<ListEvent> {
        self.step(Step::Prev)
    }

    fn step(&mut self, dir: Step) -> Option<ListEvent> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        let moved = selection::step(self.selected_index, count, dir);
        self.viewport.follow(moved, dir, count);
        if moved.index == self.selected_index {
            return None;
        }
        self.selected_index = moved.index;
        Some(ListEvent::IndexChanged { index: moved.index })
    }

    /// Previous option of a selected cycle entry
    pub fn move_left(&mut self) -> Option<ListEvent> {
        self.cycle_selected(Step::Prev)
    }

    /// Next option of a selected cycle entry
    pub fn move_right(&mut self) -> Option<ListEvent> {
        self.cycle_selected(Step::Next)
    }

    fn cycle_selected(&mut self, dir: Step) -> Option<ListEvent> {
        let index = self.selection()?;
        let entry = self.selected_entry_mut()?;
        match &mut entry.kind {
            EntryKind::Cycle { options, .. } if options.is_empty() => None,
            EntryKind::Cycle { options, current } => {
                *current = selection::step(*current, options.len(), dir).index;
                Some(ListEvent::CycleChanged { index, option: *current })
            }
            EntryKind::Plain | EntryKind::Toggle { .. } | EntryKind::NestedList { .. } => None,
        }
    }

    /// Activate the selected entry
    pub fn activate(&mut self) -> Option<ListEvent> {
        let index = self.selection()?;
        let entry = self.selected_entry_mut()?;
        let event = match &mut entry.kind {
            EntryKind::Plain | EntryKind::Cycle { .. } => ListEvent::EntryActivated { index },
            EntryKind::Toggle { checked } => {
                *checked = !*checked;
                ListEvent::ToggleChanged { index, checked: *checked }
            }
            EntryKind::NestedList { expanded, .. } => {
                *expanded = !*expanded;
                if *expanded {
                    ListEvent::Expanded { index }
                } else {
                    ListEvent::Collapsed { index }
                }
            }
        };
        Some(event)
    }

    /// Select `index` directly.
    ///
    /// An index past the bottom of the window becomes the new bottom row and
    /// one before the top becomes the new top row, so the window moves as
    /// little as possible.
    pub fn jump_to(&mut self, index: usize) -> Result<Option<ListEvent>> {
        let count = self.count();
        if index >= count {
            tracing::warn!(index, count, "jump_to out of range");
            return Err(MenuError::InvalidArgument { index, count });
        }
        self.viewport.reveal(index, count);
        if index == self.selected_index {
            return Ok(None);
        }
        self.selected_index = index;
        Ok(Some(ListEvent::IndexChanged { index }))
    }

    /// Entry index under a screen point
    pub fn index_at_point(&self, x: u16, y: u16, geometry: &dyn RowGeometry) -> Option<usize> {
        hit_slot(geometry, self.viewport.width, x, y)
            .map(|(slot, _)| self.viewport.min_index + slot)
    }

    /// Pointer click: selects an unselected row, activates the selected one.
    ///
    /// On a selected cycle row the arrow region advances the option
    /// (forward only) and the label region activates.
    pub fn click_at(&mut self, x: u16, y: u16, geometry: &dyn RowGeometry) -> Option<ListEvent> {
        let (slot, region) = hit_slot(geometry, self.viewport.width, x, y)?;
        let index = self.viewport.min_index + slot;
        if !self.is_selected(index) {
            return self.jump_to(index).ok().flatten();
        }
        let on_cycle = self.entries.get(index).is_some_and(Entry::is_cycle);
        match (on_cycle, region) {
            (true, RowRegion::Arrow) => self.move_right(),
            (true, RowRegion::Label) => Some(ListEvent::EntryActivated { index }),
            (false, _) => self.activate(),
        }
    }

    // --- Mutation ---

    /// Reset selection to the first entry and the viewport to the first page
    pub fn refresh(&mut self) {
        self.selected_index = 0;
        self.viewport = Viewport::new(0, self.count().min(self.capacity));
    }

    /// Append an entry
    pub fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.settle();
    }

    /// Insert an entry before `index` (`index == count` appends)
    pub fn insert_at(&mut self, index: usize, entry: Entry) -> Result<()> {
        let count = self.count();
        if index > count {
            tracing::warn!(index, count, "insert_at out of range");
            return Err(MenuError::InvalidArgument { index, count });
        }
        self.entries.insert(index, entry);
        self.settle();
        Ok(())
    }

    /// Remove and return the entry at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Entry> {
        let count = self.count();
        if index >= count {
            tracing::warn!(index, count, "remove_at out of range");
            return Err(MenuError::InvalidArgument { index, count });
        }
        let overflow = count > self.capacity;
        let removed = self.entries.remove(index);
        if overflow && index < self.viewport.end() && self.viewport.min_index > 0 {
            self.viewport.min_index -= 1;
        }
        self.settle();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.settle();
    }

    /// Clamp selection and viewport back into range after entries changed
    pub fn settle(&mut self) {
        let count = self.count();
        if count == 0 {
            self.selected_index = 0;
            self.viewport = Viewport::default();
            return;
        }
        self.selected_index = self.selected_index.min(count - 1);
        self.viewport.fit(count, self.capacity);
        self.viewport.reveal(self.selected_index, count);
    }
}
