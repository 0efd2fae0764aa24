//! Strategy implementations for the game room.
//!
//! - [`Fish`] — uniform random choice over hand and open stones
//! - [`Eager`] — always the first card onto the first open stone
mod eager;
mod fish;

pub use eager::*;
pub use fish::*;
