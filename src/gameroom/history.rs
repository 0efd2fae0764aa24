use crate::cards::Card;
use crate::line::Side;
use serde::Serialize;

/// One accepted play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub side: Side,
    pub card: Card,
    pub stone: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} plays {} to stone {}", self.side, self.card, self.stone)
    }
}

/// Append-only log of accepted plays, in the order the room applied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History(Vec<Move>);

impl History {
    pub(crate) fn record(&mut self, m: Move) {
        self.0.push(m);
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<&Move> {
        self.0.last()
    }
    /// Plays made by one side.
    pub fn by(&self, side: Side) -> impl Iterator<Item = &Move> {
        self.0.iter().filter(move |m| m.side == side)
    }
}
