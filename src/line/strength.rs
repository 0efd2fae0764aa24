use super::evaluator::Evaluator;
use super::kind::Kind;
use crate::cards::Card;
use serde::Serialize;

/// A complete formation's strength.
///
/// Ordered by kind first and value second, so the derived ordering is the
/// comparison rule. Two strengths that compare Equal are a genuine tie.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize)]
pub struct Strength {
    kind: Kind,
    value: u8,
}

impl Strength {
    pub fn kind(&self) -> Kind {
        self.kind
    }
    /// High card for patterned kinds, total of ranks for [`Kind::Sum`].
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl From<[Card; 3]> for Strength {
    fn from(cards: [Card; 3]) -> Self {
        Evaluator::from(cards).find_strength()
    }
}

impl From<(Kind, u8)> for Strength {
    fn from((kind, value): (Kind, u8)) -> Self {
        Self { kind, value }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<9}{:>2}", self.kind, self.value)
    }
}
