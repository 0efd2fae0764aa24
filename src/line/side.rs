/// One side of the battle line. Side A belongs to the first player, B to the second.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A = 0,
    B = 1,
}

impl Side {
    pub const fn all() -> [Self; N_SIDES] {
        [Side::A, Side::B]
    }
    /// The opposing side.
    pub const fn other(&self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl From<Side> for usize {
    fn from(side: Side) -> usize {
        side.index()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

use crate::N_SIDES;
use serde::Deserialize;
use serde::Serialize;
