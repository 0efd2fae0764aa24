/// A single clan card. Immutable, compared by value.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    clan: Clan,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn clan(&self) -> Clan {
        self.clan
    }
    /// Every card of the deck, clan-major, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        Clan::all()
            .into_iter()
            .flat_map(|clan| Rank::all().into_iter().map(move |rank| Self::from((rank, clan))))
    }
}

impl From<(Rank, Clan)> for Card {
    fn from((rank, clan): (Rank, Clan)) -> Self {
        Self { rank, clan }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-53
/// 4y
/// 2 * 9 + 3 = 21
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.clan) * N_RANKS as u8 + u8::from(c.rank) - 1
    }
}
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(n % N_RANKS as u8 + 1)?,
            clan: Clan::try_from(n / N_RANKS as u8)?,
        })
    }
}

/// str isomorphism
/// rank digit followed by clan letter, e.g. "7b"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => Ok(Self {
                rank: Rank::try_from(r)?,
                clan: Clan::try_from(c)?,
            }),
            _ => Err(anyhow::anyhow!("invalid card str: {}", s)),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        let n = rand::random_range(0..N_CARDS as u8);
        Self::from((Rank::all()[n as usize % N_RANKS], Clan::all()[n as usize / N_RANKS]))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.clan)
    }
}

use super::clan::Clan;
use super::rank::Rank;
use crate::Arbitrary;
use crate::N_CARDS;
use crate::N_RANKS;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
