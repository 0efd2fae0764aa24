/// Face value of a card, 1 through 9.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl Rank {
    pub const MIN: Self = Rank::One;
    pub const MAX: Self = Rank::Nine;

    pub const fn all() -> [Self; N_RANKS] {
        [
            Rank::One,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
        ]
    }

    /// Numeric value used for sums and high-card comparisons.
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

/// u8 isomorphism
///
/// Ranks are numbered from 1, so 0 and anything above 9 are rejected.
impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        n.checked_sub(1)
            .and_then(|i| Self::all().get(i as usize).copied())
            .ok_or_else(|| anyhow::anyhow!("invalid rank u8: {}", n))
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.value()
    }
}

/// char isomorphism
impl TryFrom<char> for Rank {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .ok_or_else(|| anyhow::anyhow!("invalid rank char: {}", c))
            .and_then(|d| Rank::try_from(d as u8))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

use crate::N_RANKS;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::try_from(u8::from(rank)).unwrap());
    }

    #[test]
    fn ordered_by_value() {
        assert!(Rank::One < Rank::Two);
        assert!(Rank::Eight < Rank::Nine);
        assert_eq!(Rank::MAX.value(), 9);
        assert_eq!(Rank::MIN.value(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Rank::try_from(0u8).is_err());
        assert!(Rank::try_from(10u8).is_err());
        assert!(Rank::try_from('0').is_err());
        assert!(Rank::try_from('T').is_err());
    }
}
