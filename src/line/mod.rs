//! The contested line.
//!
//! - [`CardSet`] holds up to three cards for one side of one stone
//! - [`Evaluator`] classifies a full set into a [`Strength`] of some [`Kind`]
//! - [`Stone`] pairs two sets with a monotonic [`Winner`]
//! - [`Line`] is the owned row of nine stones
//! - [`BattleLine`] shares a line between the room and its readers
//! - [`Snapshot`] is a detached, serializable copy for display
mod battleline;
mod evaluator;
mod kind;
mod line;
mod rejection;
mod set;
mod side;
mod snapshot;
mod stone;
mod strength;
mod winner;

pub use battleline::*;
pub use evaluator::*;
pub use kind::*;
pub use line::*;
pub use rejection::*;
pub use set::*;
pub use side::*;
pub use snapshot::*;
pub use stone::*;
pub use strength::*;
pub use winner::*;
