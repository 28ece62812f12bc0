/// Small icon drawn at either edge of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Lock,
    Star,
    Tick,
    New,
    Warning,
}
