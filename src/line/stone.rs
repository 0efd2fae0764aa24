use super::set::CardSet;
use super::side::Side;
use super::snapshot::View;
use super::winner::Status;
use super::winner::Winner;
use crate::cards::Card;
use serde::Serialize;
use std::cmp::Ordering;

/// One contested slot: a card set per side and a monotonic winner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stone {
    sets: [CardSet; 2],
    winner: Winner,
}

impl Stone {
    /// Appends to the named side. A closed side hands the card back.
    pub fn play(&mut self, side: Side, card: Card) -> Result<(), Card> {
        self.sets[side.index()].play(card)
    }
    pub fn is_open(&self, side: Side) -> bool {
        !self.sets[side.index()].is_closed()
    }
    pub fn is_full(&self) -> bool {
        Side::all().iter().all(|s| !self.is_open(*s))
    }
    pub fn set(&self, side: Side) -> &CardSet {
        &self.sets[side.index()]
    }
    pub fn winner(&self) -> Winner {
        self.winner
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.sets.iter().any(|set| set.contains(card))
    }
    /// Side holding the stronger full formation. None while either side
    /// is incomplete or when both formations are equally strong.
    pub fn stronger(&self) -> Option<Side> {
        let a = self.set(Side::A).strength()?;
        let b = self.set(Side::B).strength()?;
        match a.cmp(&b) {
            Ordering::Greater => Some(Side::A),
            Ordering::Less => Some(Side::B),
            Ordering::Equal => None,
        }
    }
    /// Claims the stone for the stronger side once both sides are full.
    /// Returns the side only on the call that claims it.
    pub fn update_winner(&mut self) -> Option<Side> {
        if !self.winner.is_pending() {
            return None;
        }
        let side = self.stronger()?;
        self.winner = Winner::Claimed(side);
        Some(side)
    }
    pub fn status(&self) -> Status {
        match self.winner {
            Winner::Claimed(side) => Status::Won(side),
            Winner::Pending if self.is_full() && self.stronger().is_none() => Status::Tied,
            Winner::Pending => Status::Open,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", View::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(stone: &mut Stone, side: Side, cards: [&str; 3]) {
        for s in cards {
            stone.play(side, Card::try_from(s).unwrap()).unwrap();
        }
    }

    #[test]
    fn pending_until_both_sides_full() {
        let mut stone = Stone::default();
        fill(&mut stone, Side::A, ["7r", "8r", "9r"]);
        assert_eq!(stone.update_winner(), None);
        assert_eq!(stone.winner(), Winner::Pending);
        stone.play(Side::B, Card::try_from("1o").unwrap()).unwrap();
        stone.play(Side::B, Card::try_from("2y").unwrap()).unwrap();
        assert_eq!(stone.update_winner(), None);
        assert_eq!(stone.status(), Status::Open);
        stone.play(Side::B, Card::try_from("4g").unwrap()).unwrap();
        assert_eq!(stone.update_winner(), Some(Side::A));
        assert_eq!(stone.winner(), Winner::Claimed(Side::A));
        assert_eq!(stone.status(), Status::Won(Side::A));
    }

    #[test]
    fn claim_is_idempotent() {
        let mut stone = Stone::default();
        fill(&mut stone, Side::A, ["1r", "5o", "9y"]);
        fill(&mut stone, Side::B, ["2r", "3o", "4y"]);
        assert_eq!(stone.update_winner(), Some(Side::B));
        for _ in 0..3 {
            assert_eq!(stone.update_winner(), None);
            assert_eq!(stone.winner(), Winner::Claimed(Side::B));
        }
    }

    #[test]
    fn ties_stay_pending() {
        let mut stone = Stone::default();
        fill(&mut stone, Side::A, ["1r", "5o", "9y"]);
        fill(&mut stone, Side::B, ["2g", "6b", "7p"]);
        assert_eq!(stone.update_winner(), None);
        assert_eq!(stone.winner(), Winner::Pending);
        assert_eq!(stone.status(), Status::Tied);
    }

    #[test]
    fn closed_side_refuses_cards() {
        let mut stone = Stone::default();
        fill(&mut stone, Side::B, ["1r", "2r", "3r"]);
        assert!(!stone.is_open(Side::B));
        assert!(stone.is_open(Side::A));
        let extra = Card::try_from("4r").unwrap();
        assert_eq!(stone.play(Side::B, extra), Err(extra));
        assert_eq!(stone.set(Side::B).size(), 3);
    }

    #[test]
    fn renders_winner_marker() {
        let mut stone = Stone::default();
        fill(&mut stone, Side::A, ["1r", "2r", "3r"]);
        fill(&mut stone, Side::B, ["1o", "5o", "9y"]);
        stone.update_winner();
        let row = stone.to_string();
        assert!(row.contains("<| "));
        assert!(row.starts_with("     [1r 2r 3r]"));
    }
}
