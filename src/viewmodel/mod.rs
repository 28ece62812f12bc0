mod list_viewmodel;
mod menu_viewmodel;
mod events;
mod geometry;
mod selection;

pub use list_viewmodel::{MenuList, VisibleRow};
pub use menu_viewmodel::{MenuViewModel, Action};
pub use events::{Cue, ListEvent, ListPath, MenuEvent, MenuListener};
pub use geometry::{FixedRows, NoRows, RowGeometry, RowRegion};
pub use selection::{wrap_index, Viewport};
