mod keyboard;
mod mouse;

pub use keyboard::{key_matches, map_key_to_intent, to_qwerty};
pub use mouse::map_mouse_to_intents;

/// User intents derived from raw input, once per event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Back,

    // Pointer
    PointerAt { x: u16, y: u16 },
    PointerClick,

    // Actions
    Quit,
}
