use crate::viewmodel::MenuList;

use super::Badge;

/// Behaviour variant of a menu row
#[derive(Debug, Clone)]
pub enum EntryKind {
    Plain,
    Toggle {
        checked: bool,
    },
    /// Left/right walk `options` circularly; `current` always indexes into it
    Cycle {
        options: Vec<String>,
        current: usize,
    },
    NestedList {
        list: MenuList,
        expanded: bool,
    },
}

/// One selectable row of a menu list
#[derive(Debug, Clone)]
pub struct Entry {
    pub label: String,
    pub right_label: Option<String>,
    pub left_badge: Option<Badge>,
    pub right_badge: Option<Badge>,
    pub description: Option<String>,
    pub kind: EntryKind,
}

impl Entry {
    fn with_kind(label: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            label: label.into(),
            right_label: None,
            left_badge: None,
            right_badge: None,
            description: None,
            kind,
        }
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self::with_kind(label, EntryKind::Plain)
    }

    pub fn toggle(label: impl Into<String>, checked: bool) -> Self {
        Self::with_kind(label, EntryKind::Toggle { checked })
    }

    /// Create a cycle entry. Returns `None` when `options` is empty.
    pub fn cycle<S: Into<String>>(
        label: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Option<Self> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return None;
        }
        Some(Self::with_kind(label, EntryKind::Cycle { options, current: 0 }))
    }

    pub fn nested(label: impl Into<String>, list: MenuList) -> Self {
        Self::with_kind(label, EntryKind::NestedList { list, expanded: false })
    }

    pub fn with_right_label(mut self, text: impl Into<String>) -> Self {
        self.right_label = Some(text.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_left_badge(mut self, badge: Badge) -> Self {
        self.left_badge = Some(badge);
        self
    }

    pub fn with_right_badge(mut self, badge: Badge) -> Self {
        self.right_badge = Some(badge);
        self
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, EntryKind::Toggle { .. })
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self.kind, EntryKind::Cycle { .. })
    }

    pub fn is_nested(&self) -> bool {
        matches!(self.kind, EntryKind::NestedList { .. })
    }

    /// Checked state for toggle entries
    pub fn checked(&self) -> Option<bool> {
        match self.kind {
            EntryKind::Toggle { checked } => Some(checked),
            _ => None,
        }
    }

    /// Currently shown option for cycle entries
    pub fn current_option(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Cycle { options, current } => options.get(*current).map(String::as_str),
            _ => None,
        }
    }

    pub fn current_option_index(&self) -> Option<usize> {
        match self.kind {
            EntryKind::Cycle { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Select a cycle option directly, clamped into the option range
    pub fn set_option_index(&mut self, index: usize) {
        if let EntryKind::Cycle { options, current } = &mut self.kind {
            *current = index.min(options.len().saturating_sub(1));
        }
    }

    pub fn sublist(&self) -> Option<&MenuList> {
        match &self.kind {
            EntryKind::NestedList { list, .. } => Some(list),
            _ => None,
        }
    }

    pub fn sublist_mut(&mut self) -> Option<&mut MenuList> {
        match &mut self.kind {
            EntryKind::NestedList { list, .. } => Some(list),
            _ => None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.kind, EntryKind::NestedList { expanded: true, .. })
    }

    pub fn set_expanded(&mut self, value: bool) {
        if let EntryKind::NestedList { expanded, .. } = &mut self.kind {
            *expanded = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_rejects_empty_options() {
        let empty: Vec<String> = Vec::new();
        assert!(Entry::cycle("Weather", empty).is_none());
    }

    #[test]
    fn test_cycle_starts_at_first_option() {
        let entry = Entry::cycle("Weather", ["Clear", "Rain", "Fog"]).unwrap();
        assert_eq!(entry.current_option(), Some("Clear"));
        assert_eq!(entry.current_option_index(), Some(0));
    }

    #[test]
    fn test_set_option_index_clamps() {
        let mut entry = Entry::cycle("Weather", ["Clear", "Rain"]).unwrap();
        entry.set_option_index(7);
        assert_eq!(entry.current_option(), Some("Rain"));
    }

    #[test]
    fn test_builders() {
        let entry = Entry::toggle("God mode", false)
            .with_right_label("F1")
            .with_description("Player takes no damage")
            .with_left_badge(Badge::Star);

        assert!(entry.is_toggle());
        assert_eq!(entry.checked(), Some(false));
        assert_eq!(entry.right_label.as_deref(), Some("F1"));
        assert_eq!(entry.left_badge, Some(Badge::Star));
        assert!(entry.right_badge.is_none());
    }

    #[test]
    fn test_nested_starts_collapsed() {
        let entry = Entry::nested("Vehicles", MenuList::new(15));
        assert!(entry.is_nested());
        assert!(!entry.is_expanded());
        assert_eq!(entry.sublist().map(MenuList::capacity), Some(15));
    }
}
