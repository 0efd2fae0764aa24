use crate::cards::Card;
use crate::gameroom::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU player that chooses uniformly among legal plays.
/// Its randomness is private, so a seeded Fish repeats its choices.
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::seeded(rand::random())
    }
}

#[async_trait::async_trait]
impl Strategy for Fish {
    async fn decide(&mut self, hand: &[Card], open: &[usize]) -> Choice {
        // both slices are non-empty whenever the actor asks
        let stone = open.choose(&mut self.0).copied().unwrap_or_default();
        let card = self.0.random_range(0..hand.len().max(1));
        Choice { card, stone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[tokio::test]
    async fn chooses_within_bounds() {
        let mut fish = Fish::seeded(0);
        let hand = (0..6).map(|_| Card::random()).collect::<Vec<_>>();
        let open = vec![1, 4, 7];
        for _ in 0..100 {
            let choice = fish.decide(&hand, &open).await;
            assert!(choice.card < hand.len());
            assert!(open.contains(&choice.stone));
        }
    }

    #[tokio::test]
    async fn seeded_fish_repeat() {
        let hand = (0..6).map(|_| Card::random()).collect::<Vec<_>>();
        let open = (0..9).collect::<Vec<_>>();
        let mut a = Fish::seeded(17);
        let mut b = Fish::seeded(17);
        for _ in 0..20 {
            assert_eq!(a.decide(&hand, &open).await, b.decide(&hand, &open).await);
        }
    }
}
