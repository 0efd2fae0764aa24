use super::history::Move;
use crate::cards::Card;
use crate::line::Side;

/// A card proposed for a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub card: Card,
    pub stone: usize,
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} -> stone {}", self.card, self.stone)
    }
}

/// Why a player declined to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Nothing left in hand.
    EmptyHand,
    /// Every stone is closed on this player's side.
    LineClosed,
    /// The strategy produced a choice that was not legal.
    Forfeit,
}

/// Instructions from the room to a player actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Draw one card from the shoe into hand.
    Draw,
    /// Choose a play for turn number `n` and reply.
    YourTurn(usize),
    /// A rejected card is handed back.
    Refund(Card),
    /// Broadcast after every accepted play.
    Played(Move),
}

/// Answers from a player actor to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Play(Play),
    Pass(Pass),
}

/// A reply stamped with its sender and the turn it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub side: Side,
    pub turn: usize,
    pub reply: Reply,
}
