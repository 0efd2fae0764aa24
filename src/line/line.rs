use super::rejection::Rejection;
use super::side::Side;
use super::snapshot::Snapshot;
use super::stone::Stone;
use super::winner::Winner;
use crate::N_STONES;
use crate::cards::Card;

/// Nine stones in a fixed order. Created empty, never resized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line([Stone; N_STONES]);

impl Line {
    /// Indices of stones where `side` can still commit a card.
    pub fn open(&self, side: Side) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, stone)| stone.is_open(side))
            .map(|(i, _)| i)
            .collect()
    }
    /// Commits a card to one side of one stone, or refuses without touching anything.
    pub fn play(&mut self, index: usize, side: Side, card: Card) -> Result<(), Rejection> {
        if self.contains(&card) {
            return Err(Rejection::Duplicate(card));
        }
        self.0
            .get_mut(index)
            .ok_or(Rejection::OutOfBounds(index))?
            .play(side, card)
            .map_err(|_| Rejection::Closed { stone: index, side })
    }
    /// Resolves every stone that can be resolved. Returns the stones claimed by this sweep.
    pub fn update_winners(&mut self) -> Vec<(usize, Side)> {
        self.0
            .iter_mut()
            .enumerate()
            .filter_map(|(i, stone)| stone.update_winner().map(|side| (i, side)))
            .collect()
    }
    pub fn winners(&self) -> [Winner; N_STONES] {
        std::array::from_fn(|i| self.0[i].winner())
    }
    pub fn stone(&self, index: usize) -> Option<&Stone> {
        self.0.get(index)
    }
    pub fn stones(&self) -> &[Stone] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.iter().any(|stone| stone.contains(card))
    }
    /// Total cards committed across both sides.
    pub fn count(&self) -> usize {
        self.0
            .iter()
            .flat_map(|stone| Side::all().map(|side| stone.set(side).size()))
            .sum()
    }
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Stone::is_full)
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Battle line:")?;
        write!(f, "------------")?;
        self.0.iter().try_for_each(|stone| write!(f, "\n{}", stone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Status;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn starts_empty_and_open() {
        let line = Line::default();
        assert_eq!(line.open(Side::A), (0..N_STONES).collect::<Vec<_>>());
        assert_eq!(line.open(Side::B), (0..N_STONES).collect::<Vec<_>>());
        assert_eq!(line.count(), 0);
        assert!(line.winners().iter().all(Winner::is_pending));
    }

    #[test]
    fn closing_a_side_removes_it_from_open() {
        let mut line = Line::default();
        for s in ["1r", "2r", "3r"] {
            line.play(4, Side::A, card(s)).unwrap();
        }
        assert!(!line.open(Side::A).contains(&4));
        assert!(line.open(Side::B).contains(&4));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut line = Line::default();
        assert_eq!(
            line.play(N_STONES, Side::A, card("1r")),
            Err(Rejection::OutOfBounds(N_STONES))
        );
        assert_eq!(line.count(), 0);
    }

    #[test]
    fn rejects_closed_side() {
        let mut line = Line::default();
        for s in ["1r", "2r", "3r"] {
            line.play(0, Side::B, card(s)).unwrap();
        }
        assert_eq!(
            line.play(0, Side::B, card("4r")),
            Err(Rejection::Closed { stone: 0, side: Side::B })
        );
        assert_eq!(line.count(), 3);
    }

    #[test]
    fn rejects_duplicate_cards() {
        let mut line = Line::default();
        line.play(0, Side::A, card("5p")).unwrap();
        assert_eq!(
            line.play(3, Side::B, card("5p")),
            Err(Rejection::Duplicate(card("5p")))
        );
        assert_eq!(line.count(), 1);
    }

    #[test]
    fn sweep_claims_full_stones_once() {
        let mut line = Line::default();
        for (a, b) in [("7r", "1o"), ("8r", "2y"), ("9r", "4g")] {
            line.play(2, Side::A, card(a)).unwrap();
            line.play(2, Side::B, card(b)).unwrap();
        }
        assert_eq!(line.update_winners(), vec![(2, Side::A)]);
        assert_eq!(line.update_winners(), vec![]);
        assert_eq!(line.winners()[2], Winner::Claimed(Side::A));
        assert_eq!(line.stone(2).map(Stone::status), Some(Status::Won(Side::A)));
    }

    #[test]
    fn renders_header_and_rows() {
        let text = Line::default().to_string();
        let rows = text.lines().collect::<Vec<_>>();
        assert_eq!(rows[0], "Battle line:");
        assert_eq!(rows[1], "------------");
        assert_eq!(rows.len(), 2 + N_STONES);
        assert!(rows[2..].iter().all(|row| row.contains(" | ")));
    }
}
