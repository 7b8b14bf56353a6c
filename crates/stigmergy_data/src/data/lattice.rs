use super::agent::Heading;
use serde::{Deserialize, Serialize};

/// Unit step between neighbouring lattice cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeVector {
    pub dx: i32,
    pub dy: i32,
}

impl EdgeVector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Rectangular lattice with diagonal neighbours, clockwise from northwest:
///
/// ```text
///     [-1, 1] [0, 1] [1, 1]
///     [-1, 0]   *    [1, 0]
///     [-1,-1] [0,-1] [1,-1]
/// ```
pub const CANONICAL_EDGES: [EdgeVector; 8] = [
    EdgeVector::new(-1, 1),
    EdgeVector::new(0, 1),
    EdgeVector::new(1, 1),
    EdgeVector::new(1, 0),
    EdgeVector::new(1, -1),
    EdgeVector::new(0, -1),
    EdgeVector::new(-1, -1),
    EdgeVector::new(-1, 0),
];

/// The eight edge vectors indexed by heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTable([EdgeVector; 8]);

impl Default for EdgeTable {
    fn default() -> Self {
        Self(CANONICAL_EDGES)
    }
}

impl EdgeTable {
    /// Wraps an already validated table.
    pub fn new(edges: [EdgeVector; 8]) -> Self {
        Self(edges)
    }

    #[inline]
    pub fn get(&self, heading: Heading) -> EdgeVector {
        self.0[heading.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeVector> {
        self.0.iter()
    }

    pub fn as_array(&self) -> &[EdgeVector; 8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_table_is_clockwise_from_northwest() {
        let table = EdgeTable::default();
        assert_eq!(table.get(Heading::from_index(0)), EdgeVector::new(-1, 1));
        assert_eq!(table.get(Heading::from_index(2)), EdgeVector::new(1, 1));
        assert_eq!(table.get(Heading::from_index(7)), EdgeVector::new(-1, 0));
    }

    #[test]
    fn test_opposite_headings_cancel() {
        let table = EdgeTable::default();
        for h in Heading::all() {
            let a = table.get(h);
            let b = table.get(h.reversed());
            assert_eq!((a.dx + b.dx, a.dy + b.dy), (0, 0), "heading {h}");
        }
    }
}
