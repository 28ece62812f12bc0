use crate::input::Intent;

use super::events::{ListEvent, ListPath, MenuEvent, MenuListener};
use super::geometry::{NoRows, RowGeometry};
use super::MenuList;

/// Action to take after handling an intent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Redraw,
    Close,
}

/// Navigation controller: routes intents to the focused list of a menu
/// tree and fires events to subscribed listeners.
pub struct MenuViewModel {
    title: String,
    root: MenuList,
    focus_path: ListPath,
    pointer: Option<(u16, u16)>,
    listeners: Vec<Box<dyn MenuListener>>,
}

fn list_at<'a>(root: &'a MenuList, path: &[usize]) -> Option<&'a MenuList> {
    path.iter()
        .try_fold(root, |list, &index| list.entry(index)?.sublist())
}

fn list_at_mut<'a>(root: &'a mut MenuList, path: &[usize]) -> Option<&'a mut MenuList> {
    path.iter()
        .try_fold(root, |list, &index| list.entry_mut(index)?.sublist_mut())
}

fn unfocus_all(list: &mut MenuList) {
    list.set_focused(false);
    for sublist in list.sublists_mut() {
        unfocus_all(sublist);
    }
}

/// Collapse every expanded entry that is not on `path`
fn collapse_off_path(list: &mut MenuList, path: &[usize]) {
    for index in 0..list.count() {
        let on_path = path.first() == Some(&index);
        let Some(entry) = list.entry_mut(index) else { continue };
        if !on_path && entry.is_expanded() {
            tracing::debug!(index, label = %entry.label, "collapsed entry off the focus path");
            entry.set_expanded(false);
        }
        if let Some(sublist) = entry.sublist_mut() {
            let rest: &[usize] = if on_path { &path[1..] } else { &[] };
            collapse_off_path(sublist, rest);
        }
    }
}

impl MenuViewModel {
    pub fn new(title: impl Into<String>, root: MenuList) -> Self {
        let mut vm = Self {
            title: title.into(),
            root,
            focus_path: Vec::new(),
            pointer: None,
            listeners: Vec::new(),
        };
        vm.repair_focus();
        vm
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &MenuList {
        &self.root
    }

    /// Mutable access to the menu tree. Focus is re-validated on the next intent.
    pub fn root_mut(&mut self) -> &mut MenuList {
        &mut self.root
    }

    pub fn list_at(&self, path: &[usize]) -> Option<&MenuList> {
        list_at(&self.root, path)
    }

    pub fn list_at_mut(&mut self, path: &[usize]) -> Option<&mut MenuList> {
        list_at_mut(&mut self.root, path)
    }

    /// Path of the list currently receiving input
    pub fn focus_path(&self) -> &[usize] {
        &self.focus_path
    }

    pub fn focused_list(&self) -> &MenuList {
        list_at(&self.root, &self.focus_path).unwrap_or(&self.root)
    }

    /// Run a list operation on the focused list
    fn on_focused<R>(&mut self, op: impl FnOnce(&mut MenuList) -> Option<R>) -> Option<R> {
        self.repair_focus();
        let Self { root, focus_path, .. } = self;
        list_at_mut(root, focus_path).and_then(op)
    }

    /// Labels of the expanded entries leading to the focused list
    pub fn breadcrumb(&self) -> Vec<&str> {
        let mut labels = Vec::with_capacity(self.focus_path.len());
        let mut list = &self.root;
        for &index in &self.focus_path {
            let Some(entry) = list.entry(index) else { break };
            labels.push(entry.label.as_str());
            match entry.sublist() {
                Some(sublist) => list = sublist,
                None => break,
            }
        }
        labels
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    pub fn subscribe(&mut self, listener: impl MenuListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Handle a user intent without pointer geometry
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        self.handle_intent_with(intent, &NoRows)
    }

    /// Handle a user intent and return the action to take.
    ///
    /// `geometry` places the visible rows of the focused list on screen and is
    /// only consulted for pointer clicks.
    pub fn handle_intent_with(&mut self, intent: Intent, geometry: &dyn RowGeometry) -> Action {
        tracing::debug!(?intent, focus = ?self.focus_path, "handle intent");
        self.repair_focus();
        let path = self.focus_path.clone();

        let event = match intent {
            Intent::Quit => return Action::Close,
            Intent::MoveUp => self.on_focused(MenuList::move_prev),
            Intent::MoveDown => self.on_focused(MenuList::move_next),
            Intent::MoveLeft => self.on_focused(MenuList::move_left),
            Intent::MoveRight => self.on_focused(MenuList::move_right),
            Intent::Select => self.on_focused(MenuList::activate),
            Intent::Back => {
                if path.is_empty() {
                    return Action::Close;
                }
                return self.collapse_focused();
            }
            Intent::PointerAt { x, y } => {
                self.pointer = Some((x, y));
                None
            }
            Intent::PointerClick => match self.pointer {
                Some((x, y)) => self.on_focused(|list| list.click_at(x, y, geometry)),
                None => None,
            },
        };

        if let Some(event) = event {
            self.dispatch(path, event);
        }
        Action::Redraw
    }

    /// Collapse the innermost expanded entry and return focus to its list
    fn collapse_focused(&mut self) -> Action {
        let Some(index) = self.focus_path.pop() else {
            return Action::Redraw;
        };
        let parent_path = self.focus_path.clone();
        let entry = list_at_mut(&mut self.root, &parent_path).and_then(|l| l.entry_mut(index));
        if let Some(entry) = entry {
            entry.set_expanded(false);
        }
        self.dispatch(parent_path, ListEvent::Collapsed { index });
        Action::Redraw
    }

    fn dispatch(&mut self, path: ListPath, event: ListEvent) {
        match event {
            ListEvent::Expanded { index } => {
                let mut inner = path.clone();
                inner.push(index);
                tracing::info!(list = ?inner, "focus entered nested list");
                self.focus_path = inner;
            }
            ListEvent::Collapsed { index } => {
                let collapsed_prefix = self.focus_path.len() > path.len()
                    && self.focus_path.starts_with(&path)
                    && self.focus_path[path.len()] == index;
                if collapsed_prefix {
                    self.focus_path.truncate(path.len());
                }
                tracing::info!(list = ?path, index, "nested list collapsed");
            }
            ListEvent::EntryActivated { index } => {
                tracing::info!(list = ?path, index, "entry activated");
            }
            ListEvent::ToggleChanged { index, checked } => {
                tracing::info!(list = ?path, index, checked, "toggle changed");
            }
            ListEvent::CycleChanged { index, option } => {
                tracing::debug!(list = ?path, index, option, "cycle changed");
            }
            ListEvent::IndexChanged { index } => {
                tracing::debug!(list = ?path, index, "index changed");
            }
        }
        self.repair_focus();

        let event = MenuEvent { list: path, event };
        let Self { root, listeners, .. } = self;
        for listener in listeners.iter_mut() {
            // A previous listener may have removed the list
            let Some(list) = list_at_mut(root, &event.list) else { break };
            listener.on_event(&event, list);
            list.settle();
        }
        self.repair_focus();
    }

    /// Trim the focus path to entries that still exist and are expanded,
    /// collapse expanded entries left off the path, then mark exactly one
    /// list as focused.
    fn repair_focus(&mut self) {
        let mut valid = 0;
        let mut list = &self.root;
        for &index in &self.focus_path {
            let Some(entry) = list.entry(index).filter(|e| e.is_expanded()) else { break };
            let Some(sublist) = entry.sublist() else { break };
            list = sublist;
            valid += 1;
        }
        if valid < self.focus_path.len() {
            tracing::debug!(path = ?self.focus_path, valid, "focus path trimmed");
            self.focus_path.truncate(valid);
        }
        collapse_off_path(&mut self.root, &self.focus_path);

        unfocus_all(&mut self.root);
        let Self { root, focus_path, .. } = self;
        if let Some(focused) = list_at_mut(root, focus_path) {
            focused.set_focused(true);
        }
    }
}
