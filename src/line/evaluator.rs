use super::kind::Kind;
use super::strength::Strength;
use crate::cards::Card;

/// Classifies a complete 3-card formation.
///
/// Each pattern is searched in precedence order and the first hit wins;
/// a hand with no pattern falls through to its rank total.
pub struct Evaluator([Card; 3]);
impl From<[Card; 3]> for Evaluator {
    fn from(cards: [Card; 3]) -> Self {
        Self(cards)
    }
}

impl Evaluator {
    pub fn find_strength(&self) -> Strength {
        None.or_else(|| self.find_color_run())
            .or_else(|| self.find_triple())
            .or_else(|| self.find_color())
            .or_else(|| self.find_run())
            .unwrap_or_else(|| self.find_sum())
    }

    fn find_color_run(&self) -> Option<Strength> {
        self.is_flush()
            .then(|| self.find_run())
            .flatten()
            .map(|run| Strength::from((Kind::ColorRun, run.value())))
    }
    fn find_triple(&self) -> Option<Strength> {
        self.is_triple()
            .then(|| Strength::from((Kind::Triple, self.high_card())))
    }
    fn find_color(&self) -> Option<Strength> {
        self.is_flush()
            .then(|| Strength::from((Kind::Color, self.high_card())))
    }
    fn find_run(&self) -> Option<Strength> {
        self.is_run()
            .then(|| Strength::from((Kind::Run, self.high_card())))
    }
    fn find_sum(&self) -> Strength {
        Strength::from((Kind::Sum, self.sum()))
    }

    fn is_flush(&self) -> bool {
        let [a, b, c] = self.0;
        a.clan() == b.clan() && b.clan() == c.clan()
    }
    fn is_triple(&self) -> bool {
        let [a, b, c] = self.0;
        a.rank() == b.rank() && b.rank() == c.rank()
    }
    /// Strictly consecutive ranks. Any repeated rank disqualifies.
    fn is_run(&self) -> bool {
        let [lo, mid, hi] = self.ranks();
        mid == lo + 1 && hi == mid + 1
    }
    fn high_card(&self) -> u8 {
        self.ranks()[2]
    }
    fn sum(&self) -> u8 {
        self.ranks().iter().sum()
    }
    fn ranks(&self) -> [u8; 3] {
        let mut ranks = self.0.map(|card| card.rank().value());
        ranks.sort_unstable();
        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(cards: [&str; 3]) -> Strength {
        Strength::from(cards.map(|s| Card::try_from(s).unwrap()))
    }

    #[test]
    fn color_run() {
        let s = strength(["3r", "4r", "5r"]);
        assert_eq!(s.kind(), Kind::ColorRun);
        assert_eq!(s.value(), 5);
    }

    #[test]
    fn color_run_any_order() {
        assert_eq!(strength(["9b", "7b", "8b"]), Strength::from((Kind::ColorRun, 9)));
    }

    #[test]
    fn triple() {
        let s = strength(["7r", "7o", "7y"]);
        assert_eq!(s.kind(), Kind::Triple);
        assert_eq!(s.value(), 7);
    }

    #[test]
    fn color() {
        assert_eq!(strength(["1g", "5g", "9g"]), Strength::from((Kind::Color, 9)));
    }

    #[test]
    fn run() {
        let s = strength(["2r", "3o", "4y"]);
        assert_eq!(s.kind(), Kind::Run);
        assert_eq!(s.value(), 4);
    }

    #[test]
    fn sum() {
        assert_eq!(strength(["1r", "5o", "9y"]), Strength::from((Kind::Sum, 15)));
        assert_eq!(strength(["2r", "3o", "9y"]), Strength::from((Kind::Sum, 14)));
    }

    #[test]
    fn pair_is_not_a_run() {
        assert_eq!(strength(["4r", "4o", "5y"]).kind(), Kind::Sum);
    }

    #[test]
    fn gap_is_not_a_run() {
        assert_eq!(strength(["4r", "5o", "7y"]).kind(), Kind::Sum);
    }

    #[test]
    fn run_beats_biggest_sum() {
        let run = strength(["1r", "2o", "3y"]);
        let sum = strength(["9r", "9o", "8y"]);
        assert!(run > sum);
    }

    #[test]
    fn precedence() {
        let color_run = strength(["1p", "2p", "3p"]);
        let triple = strength(["9r", "9o", "9y"]);
        let color = strength(["1b", "3b", "9b"]);
        let run = strength(["7r", "8o", "9y"]);
        let sum = strength(["9r", "9o", "8y"]);
        assert!(color_run > triple);
        assert!(triple > color);
        assert!(color > run);
        assert!(run > sum);
    }

    #[test]
    fn equal_sums_from_different_ranks_tie() {
        assert_eq!(strength(["1r", "5o", "9y"]), strength(["2g", "6b", "7p"]));
    }
}
