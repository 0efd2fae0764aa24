use super::side::Side;
use crate::cards::Card;

/// Reasons a play is refused at the line boundary.
/// A refused play leaves the line untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("stone {0} is not on the line")]
    OutOfBounds(usize),
    #[error("stone {stone} is closed on side {side}")]
    Closed { stone: usize, side: Side },
    #[error("card {0} is already on the line")]
    Duplicate(Card),
}
