use super::strength::Strength;
use crate::Arbitrary;
use crate::CAPACITY;
use crate::cards::Card;
use serde::Serialize;

/// The cards one side has committed to one stone. Append-only, at most three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardSet(Vec<Card>);

impl CardSet {
    /// Appends a card. A closed set hands the card back untouched.
    pub fn play(&mut self, card: Card) -> Result<(), Card> {
        if self.is_closed() {
            Err(card)
        } else {
            self.0.push(card);
            Ok(())
        }
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_closed(&self) -> bool {
        self.size() >= CAPACITY
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Strength of the formation, once all three cards are in.
    pub fn strength(&self) -> Option<Strength> {
        <[Card; 3]>::try_from(self.0.as_slice())
            .ok()
            .map(Strength::from)
    }
}

/// Bracketed, space separated card text: `[3r 4r 5r]`.
pub(crate) fn bracket(cards: &[Card]) -> String {
    let cards = cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", cards)
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", bracket(&self.0))
    }
}

/// A random complete formation of three distinct cards.
impl Arbitrary for CardSet {
    fn random() -> Self {
        let mut set = Self::default();
        while !set.is_closed() {
            let card = Card::random();
            if !set.contains(&card) {
                let _ = set.play(card);
            }
        }
        set
    }
}
