use crate::cards::Card;
use crate::gameroom::*;

/// Deterministic player: first card in hand onto the lowest open stone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eager;

#[async_trait::async_trait]
impl Strategy for Eager {
    async fn decide(&mut self, _: &[Card], open: &[usize]) -> Choice {
        Choice {
            card: 0,
            stone: open.first().copied().unwrap_or_default(),
        }
    }
}
