// Pointer hit-testing against the rendered layout

mod common;

use overlay_menu::input::Intent;
use overlay_menu::view;
use overlay_menu::viewmodel::{Action, ListEvent, MenuViewModel, RowGeometry};
use ratatui::layout::Rect;

const SCREEN: Rect = Rect { x: 0, y: 0, width: 60, height: 24 };

fn click(vm: &mut MenuViewModel, x: u16, y: u16) -> Action {
    click_on(SCREEN, vm, x, y)
}

fn click_on(screen: Rect, vm: &mut MenuViewModel, x: u16, y: u16) -> Action {
    let layout = view::layout(screen, vm);
    vm.handle_intent_with(Intent::PointerAt { x, y }, &layout);
    vm.handle_intent_with(Intent::PointerClick, &layout)
}

fn row_y(vm: &MenuViewModel, slot: usize) -> u16 {
    view::layout(SCREEN, vm).row_bounds(slot).unwrap().y
}

#[test]
fn test_click_unselected_row_moves_selection() {
    let mut vm = common::mixed_menu(0);
    let log = common::record(&mut vm);

    let y = row_y(&vm, 1);
    click(&mut vm, 5, y);
    assert_eq!(vm.root().selection(), Some(1));
    assert_eq!(common::kinds(&log), vec![ListEvent::IndexChanged { index: 1 }]);
    assert_eq!(vm.root().entry(1).unwrap().checked(), Some(false));
}

#[test]
fn test_click_selected_row_activates() {
    let mut vm = common::mixed_menu(0);
    let log = common::record(&mut vm);

    let y = row_y(&vm, 1);
    click(&mut vm, 5, y);
    click(&mut vm, 5, y);
    assert_eq!(
        common::kinds(&log),
        vec![
            ListEvent::IndexChanged { index: 1 },
            ListEvent::ToggleChanged { index: 1, checked: true },
        ]
    );
}

#[test]
fn test_cycle_label_and_arrow_regions() {
    let mut vm = common::mixed_menu(0);
    let log = common::record(&mut vm);
    vm.handle_intent(Intent::MoveDown);
    vm.handle_intent(Intent::MoveDown);
    log.borrow_mut().clear();

    let layout = view::layout(SCREEN, &vm);
    let row = layout.row_bounds(2).unwrap();
    let split = layout.arrow_split(2).unwrap();

    click(&mut vm, row.x + 1, row.y);
    click(&mut vm, split, row.y);
    click(&mut vm, row.right() - 1, row.y);

    assert_eq!(
        common::kinds(&log),
        vec![
            ListEvent::EntryActivated { index: 2 },
            ListEvent::CycleChanged { index: 2, option: 1 },
            ListEvent::CycleChanged { index: 2, option: 2 },
        ]
    );
}

#[test]
fn test_click_outside_rows_is_ignored() {
    let mut vm = common::mixed_menu(0);
    let log = common::record(&mut vm);

    assert_eq!(click(&mut vm, 5, 0), Action::Redraw);
    assert_eq!(click(&mut vm, 5, SCREEN.height - 1), Action::Redraw);
    assert!(log.borrow().is_empty());
    assert_eq!(vm.root().selection(), Some(0));
}

#[test]
fn test_click_in_scrolled_window() {
    let mut vm = common::mixed_menu(20);
    vm.handle_intent(Intent::MoveUp);
    assert_eq!(vm.root().viewport().min_index, 14);

    let y = row_y(&vm, 0);
    let layout = view::layout(SCREEN, &vm);
    assert_eq!(vm.root().index_at_point(5, y, &layout), Some(14));

    click(&mut vm, 5, y);
    assert_eq!(vm.root().selection(), Some(14));
    assert_eq!(vm.root().viewport().min_index, 14);
}

#[test]
fn test_click_acts_on_focused_list() {
    let mut vm = common::mixed_menu(0);
    vm.handle_intent(Intent::MoveUp);
    vm.handle_intent(Intent::Select);
    assert_eq!(vm.focus_path(), &[3]);

    let y = row_y(&vm, 4);
    let x = view::layout(SCREEN, &vm).row_bounds(4).unwrap().x + 2;
    click(&mut vm, x, y);
    assert_eq!(vm.focused_list().selection(), Some(4));
    assert_eq!(vm.root().selection(), Some(3));
}

#[test]
fn test_click_on_short_screen_hits_row_under_pointer() {
    // 7 list rows on screen, fewer than the 10-row window
    let short = Rect { x: 0, y: 0, width: 60, height: 16 };
    let mut vm = common::mixed_menu(20);
    let log = common::record(&mut vm);
    for _ in 0..9 {
        vm.handle_intent(Intent::MoveDown);
    }
    assert_eq!(vm.root().viewport().min_index, 0);
    log.borrow_mut().clear();

    // Bottom row is the selected "Extra 5"
    click_on(short, &mut vm, 5, 10);
    assert_eq!(common::kinds(&log), vec![ListEvent::EntryActivated { index: 9 }]);

    // Top row shows slot 3, not slot 0
    click_on(short, &mut vm, 5, 4);
    assert_eq!(vm.root().selection(), Some(3));
    assert_eq!(vm.root().selected_entry().unwrap().label, "Vehicles");

    // With the selection back in the first page, rows line up from slot 0
    let layout = view::layout(short, &vm);
    assert_eq!(layout.focused_pane().unwrap().first_slot, 0);
    assert_eq!(layout.row_bounds(3).unwrap().y, 7);
    click_on(short, &mut vm, 5, 7);
    assert_eq!(vm.focus_path(), &[3]);
}
