use super::line::Line;
use super::set::bracket;
use super::side::Side;
use super::stone::Stone;
use super::winner::Status;
use super::winner::Winner;
use crate::N_STONES;
use crate::cards::Card;
use serde::Serialize;

/// A read-only copy of one stone for display collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub a: Vec<Card>,
    pub b: Vec<Card>,
    pub winner: Winner,
    pub status: Status,
}

impl View {
    pub fn cards(&self, side: Side) -> &[Card] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

/// One row of the line: side A right-aligned, the status marker, side B.
impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>15}{}{:<15}",
            bracket(&self.a),
            self.status.marker(),
            bracket(&self.b)
        )
    }
}

impl From<&Stone> for View {
    fn from(stone: &Stone) -> Self {
        Self {
            a: stone.set(Side::A).cards().to_vec(),
            b: stone.set(Side::B).cards().to_vec(),
            winner: stone.winner(),
            status: stone.status(),
        }
    }
}

/// The whole line copied out in one consistent read.
///
/// Owned and detached: holding a snapshot never blocks the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    stones: Vec<View>,
}

impl Snapshot {
    pub fn stones(&self) -> &[View] {
        &self.stones
    }
    pub fn winners(&self) -> [Winner; N_STONES] {
        std::array::from_fn(|i| {
            self.stones
                .get(i)
                .map(|view| view.winner)
                .unwrap_or_default()
        })
    }
}

impl From<&Line> for Snapshot {
    fn from(line: &Line) -> Self {
        Self {
            stones: line.stones().iter().map(View::from).collect(),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from(&Line::default())
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Battle line:")?;
        write!(f, "------------")?;
        self.stones
            .iter()
            .try_for_each(|view| write!(f, "\n{}", view))
    }
}
