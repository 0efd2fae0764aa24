use super::card::Card;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// An owned, depletable draw pile.
///
/// Built once with all 54 cards and shuffled by a seeded RNG, so the draw
/// order is reproducible for a given seed. Cards leave from the top and
/// never come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Creates a full deck shuffled with a Fisher-Yates pass seeded by `seed`.
    pub fn new(seed: u64) -> Self {
        let ref mut rng = StdRng::seed_from_u64(seed);
        let mut cards = Card::all().collect::<Vec<_>>();
        cards.shuffle(rng);
        Self(cards)
    }
    /// Removes and returns the top card, or None once the pile is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Cards remaining in the pile.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Tests whether a card is still in the pile.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

impl ExactSizeIterator for Deck {}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
