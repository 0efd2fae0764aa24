/// Formation classes, weakest to strongest.
///
/// The derived ordering is the comparison order, so variant order matters.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Kind {
    /// No pattern. Valued by the sum of ranks.
    Sum,
    /// Three consecutive ranks, mixed clans.
    Run,
    /// Three cards of one clan.
    Color,
    /// Three cards of one rank.
    Triple,
    /// Three consecutive ranks of one clan.
    ColorRun,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Kind::Sum => "Sum",
            Kind::Run => "Run",
            Kind::Color => "Color",
            Kind::Triple => "Triple",
            Kind::ColorRun => "ColorRun",
        })
    }
}

use serde::Serialize;
