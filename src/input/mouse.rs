use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::Intent;

/// Map a mouse event to intents. A left press yields a pointer move
/// followed by a click at that position.
pub fn map_mouse_to_intents(event: &MouseEvent) -> Vec<Intent> {
    let at = Intent::PointerAt { x: event.column, y: event.row };
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => vec![at, Intent::PointerClick],
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => vec![at],
        MouseEventKind::ScrollUp => vec![Intent::MoveUp],
        MouseEventKind::ScrollDown => vec![Intent::MoveDown],
        MouseEventKind::Down(MouseButton::Right) => vec![Intent::Back],
        _ => Vec::new(),
    }
}
