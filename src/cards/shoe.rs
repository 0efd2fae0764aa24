use super::card::Card;
use super::deck::Deck;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

/// The dealing shoe: a [`Deck`] shared by both players and the room.
///
/// Draws take the write lock, so they are strictly serialized. Size reads
/// take the read lock and only reflect draws that already completed; they are
/// advisory and never used to decide whether a draw will succeed.
#[derive(Debug, Clone, Default)]
pub struct Shoe(Arc<RwLock<Deck>>);

impl Shoe {
    pub fn new(seed: u64) -> Self {
        Self::from(Deck::new(seed))
    }
    /// Removes the top card. None means the deck is exhausted, which is not a fault.
    pub fn draw(&self) -> Option<Card> {
        let mut deck = self.0.write().unwrap_or_else(PoisonError::into_inner);
        log::debug!("[shoe] drawing from a deck with {} cards left", deck.size());
        deck.draw()
    }
    pub fn size(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).size()
    }
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl From<Deck> for Shoe {
    fn from(deck: Deck) -> Self {
        Self(Arc::new(RwLock::new(deck)))
    }
}
