/// The suit-like category of a card. Six clans, each holding ranks 1 through 9.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Clan {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    Purple = 5,
}

impl Clan {
    pub const fn all() -> [Self; N_CLANS] {
        [
            Clan::Red,
            Clan::Orange,
            Clan::Yellow,
            Clan::Green,
            Clan::Blue,
            Clan::Purple,
        ]
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Clan {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("invalid clan u8: {}", n))
    }
}
impl From<Clan> for u8 {
    fn from(c: Clan) -> u8 {
        c as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Clan {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'r' => Ok(Clan::Red),
            'o' => Ok(Clan::Orange),
            'y' => Ok(Clan::Yellow),
            'g' => Ok(Clan::Green),
            'b' => Ok(Clan::Blue),
            'p' => Ok(Clan::Purple),
            _ => Err(anyhow::anyhow!("invalid clan char: {}", c)),
        }
    }
}
impl From<Clan> for char {
    fn from(c: Clan) -> char {
        match c {
            Clan::Red => 'r',
            Clan::Orange => 'o',
            Clan::Yellow => 'y',
            Clan::Green => 'g',
            Clan::Blue => 'b',
            Clan::Purple => 'p',
        }
    }
}

impl std::fmt::Display for Clan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

use crate::N_CLANS;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for clan in Clan::all() {
            assert_eq!(clan, Clan::try_from(u8::from(clan)).unwrap());
        }
    }

    #[test]
    fn bijective_char() {
        for clan in Clan::all() {
            assert_eq!(clan, Clan::try_from(char::from(clan)).unwrap());
        }
    }

    #[test]
    fn rejects_seventh_clan() {
        assert!(Clan::try_from(6u8).is_err());
        assert!(Clan::try_from('x').is_err());
    }
}
