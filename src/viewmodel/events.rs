use super::MenuList;

/// Chain of nested-entry indices leading from the root list to a list.
/// Empty for the root.
pub type ListPath = Vec<usize>;

/// State change reported by a single list operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    IndexChanged { index: usize },
    EntryActivated { index: usize },
    ToggleChanged { index: usize, checked: bool },
    CycleChanged { index: usize, option: usize },
    Expanded { index: usize },
    Collapsed { index: usize },
}

impl ListEvent {
    /// Index of the entry the event concerns
    pub fn index(&self) -> usize {
        match *self {
            ListEvent::IndexChanged { index }
            | ListEvent::EntryActivated { index }
            | ListEvent::ToggleChanged { index, .. }
            | ListEvent::CycleChanged { index, .. }
            | ListEvent::Expanded { index }
            | ListEvent::Collapsed { index } => index,
        }
    }
}

/// Feedback cue the embedder may map to a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Navigate,
    Select,
}

/// Event fired by the navigation controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEvent {
    pub list: ListPath,
    pub event: ListEvent,
}

impl MenuEvent {
    pub fn cue(&self) -> Cue {
        match self.event {
            ListEvent::IndexChanged { .. } | ListEvent::CycleChanged { .. } => Cue::Navigate,
            ListEvent::EntryActivated { .. }
            | ListEvent::ToggleChanged { .. }
            | ListEvent::Expanded { .. }
            | ListEvent::Collapsed { .. } => Cue::Select,
        }
    }
}

/// Receives events synchronously while input is processed.
///
/// `list` is the list that fired the event. It may be mutated freely; the
/// controller restores list invariants after every call. Calls made on `list`
/// from here do not fire further events.
pub trait MenuListener {
    fn on_event(&mut self, event: &MenuEvent, list: &mut MenuList);
}

impl<F> MenuListener for F
where
    F: FnMut(&MenuEvent, &mut MenuList),
{
    fn on_event(&mut self, event: &MenuEvent, list: &mut MenuList) {
        self(event, list)
    }
}
