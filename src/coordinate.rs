use core::fmt;
use smallvec::SmallVec;

/// A cell on the grid, addressed by row and column. Ordering is row-major, which is also the
/// order used to break ties between frontier entries of equal estimated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    /// Sum of absolute row and column differences.
    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Orthogonal neighbours in the order up, down, left, right. Neighbours that would fall
    /// below row or column zero are left out; the upper bounds are the grid's business.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; 4]> {
        let mut neighbours = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            neighbours.push(Coordinate::new(row, self.col));
        }
        neighbours.push(Coordinate::new(self.row + 1, self.col));
        if let Some(col) = self.col.checked_sub(1) {
            neighbours.push(Coordinate::new(self.row, col));
        }
        neighbours.push(Coordinate::new(self.row, self.col + 1));
        neighbours
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
