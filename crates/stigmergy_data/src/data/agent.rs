use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight lattice directions.
///
/// Index `i` selects entry `i` of the [`EdgeTable`](super::lattice::EdgeTable),
/// listed clockwise from northwest. The wrapped value is always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Heading(u8);

impl Heading {
    /// Number of distinct headings on the lattice.
    pub const COUNT: usize = 8;

    pub fn new(value: u8) -> Option<Self> {
        ((value as usize) < Self::COUNT).then_some(Self(value))
    }

    /// Builds a heading from any index, reducing it modulo 8.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self((index % Self::COUNT) as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The heading pointing the opposite way.
    pub fn reversed(self) -> Self {
        Self::from_index(self.index() + Self::COUNT / 2)
    }

    pub fn all() -> impl Iterator<Item = Heading> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl TryFrom<u8> for Heading {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("heading {value} is outside 0..8"))
    }
}

impl From<Heading> for u8 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single ant: lattice cell plus current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Agent {
    pub x: u16,
    pub y: u16,
    pub heading: Heading,
}

impl Agent {
    pub fn new(x: u16, y: u16, heading: Heading) -> Self {
        Self { x, y, heading }
    }
}
