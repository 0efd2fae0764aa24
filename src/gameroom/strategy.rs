use super::event::Event;
use crate::cards::Card;

/// A decision: which card from hand goes to which stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Index into the hand slice given to [`Strategy::decide`].
    pub card: usize,
    /// A stone index taken from the open list given to [`Strategy::decide`].
    pub stone: usize,
}

/// Trait for whatever decides a player's moves.
///
/// Implementations see only their own hand and the stones open on their side.
/// They must not touch shared state, and must return a choice drawn from
/// the arguments; the actor forfeits the turn otherwise. Both slices are
/// non-empty whenever `decide` is called.
///
/// The async signature lets slow deciders (search, remote or human input)
/// suspend without blocking the room.
#[async_trait::async_trait]
pub trait Strategy: Send {
    async fn decide(&mut self, hand: &[Card], open: &[usize]) -> Choice;

    /// Observe instructions and broadcasts addressed to this player.
    async fn notify(&mut self, _: &Event) {}
}

#[async_trait::async_trait]
impl Strategy for Box<dyn Strategy> {
    async fn decide(&mut self, hand: &[Card], open: &[usize]) -> Choice {
        (**self).decide(hand, open).await
    }
    async fn notify(&mut self, event: &Event) {
        (**self).notify(event).await
    }
}
