mod entry;
mod badge;

pub use entry::{Entry, EntryKind};
pub use badge::Badge;
