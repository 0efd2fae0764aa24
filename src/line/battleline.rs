use super::line::Line;
use super::rejection::Rejection;
use super::side::Side;
use super::snapshot::Snapshot;
use super::winner::Winner;
use crate::N_STONES;
use crate::cards::Card;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

/// The shared battle line.
///
/// Any number of readers (players looking for open stones, display
/// collaborators) may query it concurrently; the room is the only writer.
/// Every call holds the lock for exactly one short pass over nine stones,
/// so readers always see whole stones and writers are never starved.
#[derive(Debug, Clone, Default)]
pub struct BattleLine(Arc<RwLock<Line>>);

impl BattleLine {
    pub fn open_stones(&self, side: Side) -> Vec<usize> {
        self.read().open(side)
    }
    pub fn play(&self, index: usize, side: Side, card: Card) -> Result<(), Rejection> {
        self.write().play(index, side, card)
    }
    /// Returns the stones newly claimed by this sweep.
    pub fn update_stone_winners(&self) -> Vec<(usize, Side)> {
        self.write().update_winners()
    }
    pub fn winners(&self) -> [Winner; N_STONES] {
        self.read().winners()
    }
    pub fn snapshot(&self) -> Snapshot {
        self.read().snapshot()
    }
    pub fn is_full(&self) -> bool {
        self.read().is_full()
    }
    pub fn count(&self) -> usize {
        self.read().count()
    }
    pub fn display(&self) -> String {
        self.read().to_string()
    }

    fn read(&self) -> RwLockReadGuard<'_, Line> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, Line> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Line> for BattleLine {
    fn from(line: Line) -> Self {
        Self(Arc::new(RwLock::new(line)))
    }
}
