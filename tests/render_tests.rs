// Render smoke tests on ratatui's test backend

mod common;

use overlay_menu::input::Intent;
use overlay_menu::view;
use overlay_menu::viewmodel::MenuViewModel;
use ratatui::{backend::TestBackend, Terminal};

fn screen_text(vm: &MenuViewModel) -> String {
    sized_screen_text(vm, 60, 24)
}

fn sized_screen_text(vm: &MenuViewModel, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let layout = view::layout(f.area(), vm);
            view::render(f, vm, &layout);
        })
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_renders_visible_rows_only() {
    let vm = common::mixed_menu(20);
    let text = screen_text(&vm);
    assert!(text.contains("Heal"));
    assert!(text.contains("Extra 5"));
    assert!(!text.contains("Extra 6"));
    assert!(text.contains("(1/24)"));
}

#[test]
fn test_renders_entry_state() {
    let mut vm = common::mixed_menu(0);
    vm.handle_intent(Intent::MoveDown);
    vm.handle_intent(Intent::Select);
    let text = screen_text(&vm);
    assert!(text.contains("[x]"));
    assert!(text.contains("< Clear >"));
    assert!(text.contains("▸"));
}

#[test]
fn test_renders_nested_pane_and_breadcrumb() {
    let mut vm = common::mixed_menu(0);
    vm.handle_intent(Intent::MoveUp);
    vm.handle_intent(Intent::Select);
    let text = screen_text(&vm);
    assert!(text.contains("Test › Vehicles"));
    assert!(text.contains("Item 0"));
    assert!(text.contains("Vehicles (1/20)"));
}

#[test]
fn test_short_screen_draws_rows_where_layout_puts_them() {
    let mut vm = common::mixed_menu(20);
    for _ in 0..9 {
        vm.handle_intent(Intent::MoveDown);
    }
    let text = sized_screen_text(&vm, 60, 16);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[4].contains("Vehicles"));
    assert!(lines[10].contains("Extra 5"));
    assert!(!text.contains("Heal"));
}
