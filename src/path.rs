use crate::coordinate::Coordinate;
use crate::grid::OccupancyGrid;
use core::fmt;
use itertools::Itertools;
use std::ops::Deref;

/// An ordered route from start to goal, both included. An empty path means the goal could not
/// be reached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Coordinate>);

impl Path {
    pub fn new(steps: Vec<Coordinate>) -> Self {
        Path(steps)
    }

    pub fn empty() -> Self {
        Path(Vec::new())
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    /// Number of moves along the path, one less than the number of cells.
    pub fn cost(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether every consecutive pair of cells is a single orthogonal step.
    pub fn is_contiguous(&self) -> bool {
        self.0.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    /// Whether the path is contiguous, stays on the grid and never enters a blocked cell.
    pub fn is_valid_on(&self, grid: &OccupancyGrid) -> bool {
        self.is_contiguous() && self.0.iter().all(|p| grid.can_move_to(*p))
    }

    pub fn into_vec(self) -> Vec<Coordinate> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Coordinate];

    fn deref(&self) -> &[Coordinate] {
        &self.0
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(steps: Vec<Coordinate>) -> Self {
        Path(steps)
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<no path>");
        }
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}
