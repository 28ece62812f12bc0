// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use overlay_menu::model::Entry;
use overlay_menu::viewmodel::{ListEvent, MenuEvent, MenuList, MenuViewModel};

/// List of `count` plain entries named "Item N"
pub fn plain_list(capacity: usize, count: usize) -> MenuList {
    MenuList::with_entries(capacity, (0..count).map(|i| Entry::plain(format!("Item {}", i))))
}

/// Check every list invariant
pub fn assert_invariants(list: &MenuList) {
    let count = list.count();
    let vp = list.viewport();
    assert_eq!(vp.width, count.min(list.capacity()), "width");
    assert!(vp.min_index + vp.width <= count, "window past end");
    match list.selection() {
        None => assert_eq!(count, 0),
        Some(sel) => {
            assert!(sel < count, "selection out of range");
            if count <= list.capacity() {
                assert_eq!(vp.min_index, 0, "scrolled without overflow");
            } else {
                assert!(vp.contains(sel), "selection outside window");
            }
        }
    }
}

/// Menu with one entry of every kind, then `extra` plain rows
pub fn mixed_menu(extra: usize) -> MenuViewModel {
    let nested = plain_list(15, 20);
    let mut root = MenuList::new(10);
    root.insert(Entry::plain("Heal"));
    root.insert(Entry::toggle("God mode", false));
    root.insert(Entry::cycle("Weather", ["Clear", "Rain", "Snow"]).unwrap());
    root.insert(Entry::nested("Vehicles", nested));
    for i in 0..extra {
        root.insert(Entry::plain(format!("Extra {}", i)));
    }
    root.refresh();
    MenuViewModel::new("Test", root)
}

/// Subscribe a recorder and return the shared event log
pub fn record(vm: &mut MenuViewModel) -> Rc<RefCell<Vec<MenuEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    vm.subscribe(move |event: &MenuEvent, _: &mut MenuList| sink.borrow_mut().push(event.clone()));
    log
}

pub fn kinds(log: &Rc<RefCell<Vec<MenuEvent>>>) -> Vec<ListEvent> {
    log.borrow().iter().map(|e| e.event).collect()
}
