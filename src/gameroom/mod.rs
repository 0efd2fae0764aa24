//! Turn coordination between two player actors and the room.
//!
//! The [`Room`] is the only writer of the battle line and the only one who
//! decides turn order. Each [`Actor`] runs in its own task, owns its
//! [`Hand`], and delegates decisions to a pluggable [`Strategy`]. All traffic
//! between them is [`Event`]s one way and [`Message`]s the other.
mod actor;
mod arbiter;
mod config;
mod event;
mod hand;
mod history;
mod room;
mod strategy;

pub use actor::*;
pub use arbiter::*;
pub use config::*;
pub use event::*;
pub use hand::*;
pub use history::*;
pub use room::*;
pub use strategy::*;
