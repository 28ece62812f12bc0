mod menu_view;
mod layout;
mod ui_fmt;

pub use menu_view::render;
pub use layout::{layout, MenuLayout, Pane};
