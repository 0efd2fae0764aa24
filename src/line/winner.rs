use super::side::Side;
use serde::Serialize;

/// Who holds a stone. Monotonic: once claimed it never changes.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Winner {
    #[default]
    Pending,
    Claimed(Side),
}

impl Winner {
    pub fn side(&self) -> Option<Side> {
        match self {
            Winner::Pending => None,
            Winner::Claimed(side) => Some(*side),
        }
    }
    pub fn is_pending(&self) -> bool {
        matches!(self, Winner::Pending)
    }
}

/// Observable state of a stone.
///
/// Distinguishes a stone still being filled from one whose two full sides
/// compare equal, which stays unclaimed forever.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Status {
    Open,
    Tied,
    Won(Side),
}

impl Status {
    /// Divider drawn between the two sides of a stone.
    pub fn marker(&self) -> &'static str {
        match self {
            Status::Open => " | ",
            Status::Tied => " = ",
            Status::Won(Side::A) => "<| ",
            Status::Won(Side::B) => " |>",
        }
    }
}
