use crate::N_STONES;
use crate::line::Side;
use crate::line::Winner;

/// Decides the match from the per-stone winners.
///
/// The engine carries no built-in match rule: [`Undeclared`] is the default
/// and never ends a game. The other arbiters are opt-in rule sets.
pub trait Arbiter: Send + Sync {
    fn judge(&self, winners: &[Winner; N_STONES]) -> Option<Side>;
}

impl Arbiter for Box<dyn Arbiter> {
    fn judge(&self, winners: &[Winner; N_STONES]) -> Option<Side> {
        (**self).judge(winners)
    }
}

/// Never declares a match winner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undeclared;

impl Arbiter for Undeclared {
    fn judge(&self, _: &[Winner; N_STONES]) -> Option<Side> {
        None
    }
}

/// First side to hold three adjacent stones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Breakthrough;

impl Breakthrough {
    pub const ADJACENT: usize = 3;
}

impl Arbiter for Breakthrough {
    fn judge(&self, winners: &[Winner; N_STONES]) -> Option<Side> {
        winners
            .windows(Self::ADJACENT)
            .find_map(|window| {
                let side = window[0].side()?;
                window
                    .iter()
                    .all(|w| w.side() == Some(side))
                    .then_some(side)
            })
    }
}

/// First side to hold five of the nine stones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Envelopment;

impl Envelopment {
    pub const MAJORITY: usize = 5;
}

impl Arbiter for Envelopment {
    fn judge(&self, winners: &[Winner; N_STONES]) -> Option<Side> {
        Side::all().into_iter().find(|side| {
            winners.iter().filter(|w| w.side() == Some(*side)).count() >= Self::MAJORITY
        })
    }
}

/// Either a breakthrough or an envelopment ends the match.
#[derive(Debug, Clone, Copy, Default)]
pub struct Official;

impl Arbiter for Official {
    fn judge(&self, winners: &[Winner; N_STONES]) -> Option<Side> {
        Breakthrough
            .judge(winners)
            .or_else(|| Envelopment.judge(winners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winners(pattern: &str) -> [Winner; N_STONES] {
        let marks = pattern.chars().collect::<Vec<_>>();
        std::array::from_fn(|i| match marks[i] {
            'A' => Winner::Claimed(Side::A),
            'B' => Winner::Claimed(Side::B),
            _ => Winner::Pending,
        })
    }

    #[test]
    fn undeclared_never_decides() {
        assert_eq!(Undeclared.judge(&winners("AAAAAAAAA")), None);
    }

    #[test]
    fn breakthrough_needs_adjacency() {
        assert_eq!(Breakthrough.judge(&winners("A.A.A.A.A")), None);
        assert_eq!(Breakthrough.judge(&winners("AB.BBB...")), Some(Side::B));
        assert_eq!(Breakthrough.judge(&winners("......AAA")), Some(Side::A));
    }

    #[test]
    fn envelopment_counts_anywhere() {
        assert_eq!(Envelopment.judge(&winners("A.A.A.A..")), None);
        assert_eq!(Envelopment.judge(&winners("A.A.A.A.A")), Some(Side::A));
        assert_eq!(Envelopment.judge(&winners("BABBAB.B.")), Some(Side::B));
    }

    #[test]
    fn official_takes_either() {
        assert_eq!(Official.judge(&winners("A.A.A.A.A")), Some(Side::A));
        assert_eq!(Official.judge(&winners("..BBB....")), Some(Side::B));
        assert_eq!(Official.judge(&winners("AB.AB.AB.")), None);
    }
}
