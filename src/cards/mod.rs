//! Card space and the draw pile.
//!
//! - [`Clan`] and [`Rank`] span the 6 × 9 card space
//! - [`Card`] is a single immutable (rank, clan) value
//! - [`Deck`] is an owned, seeded, depletable pile
//! - [`Shoe`] shares one deck across tasks behind a lock
mod card;
mod clan;
mod deck;
mod rank;
mod shoe;

pub use card::*;
pub use clan::*;
pub use deck::*;
pub use rank::*;
pub use shoe::*;
