use crate::cards::Card;

/// A player's private cards. Order carries no meaning for play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }
    /// Removes the card at `index`, if there is one.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.0.len()).then(|| self.0.swap_remove(index))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_removes_exactly_one() {
        let mut hand = Hand::default();
        let a = Card::try_from("1r").unwrap();
        let b = Card::try_from("2o").unwrap();
        hand.add(a);
        hand.add(b);
        assert_eq!(hand.take(0), Some(a));
        assert_eq!(hand.cards(), &[b]);
        assert_eq!(hand.take(1), None);
        assert_eq!(hand.take(0), Some(b));
        assert!(hand.is_empty());
    }
}
