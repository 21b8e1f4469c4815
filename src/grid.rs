use crate::coordinate::Coordinate;
use crate::error::{GridError, Result};
use crate::path::Path;
use crate::pathfinder::find_path;
use core::fmt;
use smallvec::SmallVec;
use std::str::FromStr;

pub const BLOCKED_SYMBOL: char = '#';
pub const FREE_SYMBOL: char = '.';
pub const START_SYMBOL: char = 'S';
pub const GOAL_SYMBOL: char = 'G';

/// [OccupancyGrid] is a fixed-size rectangular map where every cell is either blocked ([true])
/// or free ([false]). Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(rows: usize, cols: usize, default_value: bool) -> Self {
        OccupancyGrid {
            rows,
            cols,
            cells: vec![default_value; rows * cols],
        }
    }

    /// Builds a grid from nested rows of blocked flags. Fails on rows of differing length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n_cols {
                return Err(GridError::Ragged {
                    row,
                    expected: n_cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(OccupancyGrid {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Fails with [GridError::OutOfBounds] if `pos` lies outside the grid.
    pub fn check_bounds(&self, pos: Coordinate) -> Result<()> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coordinate: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn ix(&self, pos: Coordinate) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Whether `pos` is blocked.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    pub fn get(&self, pos: Coordinate) -> bool {
        assert!(self.in_bounds(pos), "{pos} is outside the grid");
        self.cells[self.ix(pos)]
    }

    /// # Panics
    /// If `pos` is out of bounds.
    pub fn set(&mut self, pos: Coordinate, blocked: bool) {
        assert!(self.in_bounds(pos), "{pos} is outside the grid");
        let ix = self.ix(pos);
        self.cells[ix] = blocked;
    }

    pub fn is_blocked(&self, pos: Coordinate) -> bool {
        self.get(pos)
    }

    pub fn can_move_to(&self, pos: Coordinate) -> bool {
        self.in_bounds(pos) && !self.cells[self.ix(pos)]
    }

    /// Free orthogonal neighbours of `pos`, up, down, left, right.
    pub fn neighborhood_points(&self, pos: &Coordinate) -> SmallVec<[Coordinate; 4]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coordinate::new(row, col)))
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| {
                    if self.get(Coordinate::new(row, col)) {
                        BLOCKED_SYMBOL
                    } else {
                        FREE_SYMBOL
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses a text map, one line per row. Blank lines and surrounding whitespace are ignored.
/// Returns the grid and the positions of any `S`/`G` markers, which count as free cells.
fn parse_map(s: &str) -> Result<(OccupancyGrid, Vec<(char, Coordinate)>)> {
    let mut markers = Vec::new();
    let mut rows = Vec::new();
    for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
        let mut values = Vec::with_capacity(line.len());
        for (col, symbol) in line.chars().enumerate() {
            let blocked = match symbol {
                BLOCKED_SYMBOL => true,
                FREE_SYMBOL => false,
                START_SYMBOL | GOAL_SYMBOL => {
                    markers.push((symbol, Coordinate::new(row, col)));
                    false
                }
                _ => return Err(GridError::InvalidCell { symbol, row, col }),
            };
            values.push(blocked);
        }
        rows.push(values);
    }
    Ok((OccupancyGrid::from_rows(rows)?, markers))
}

impl FromStr for OccupancyGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        parse_map(s).map(|(grid, _)| grid)
    }
}

/// A grid together with the robot's start and goal cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub grid: OccupancyGrid,
    pub start: Coordinate,
    pub goal: Coordinate,
}

impl Scenario {
    /// Bundles a grid and endpoints, failing if either endpoint is out of bounds.
    pub fn new(grid: OccupancyGrid, start: Coordinate, goal: Coordinate) -> Result<Self> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        Ok(Scenario { grid, start, goal })
    }

    /// Runs a fresh search from start to goal. Calling this again on an unchanged scenario
    /// yields the same path.
    pub fn solve(&self) -> Result<Path> {
        find_path(&self.grid, self.start, self.goal)
    }
}

impl FromStr for Scenario {
    type Err = GridError;

    /// Parses a map with exactly one `S` and one `G` marker.
    fn from_str(s: &str) -> Result<Self> {
        let (grid, markers) = parse_map(s)?;
        let find = |symbol: char, name: &'static str| -> Result<Coordinate> {
            let mut found = markers.iter().filter(|(m, _)| *m == symbol).map(|(_, c)| *c);
            let first = found.next().ok_or(GridError::MissingEndpoint(name))?;
            match found.next() {
                Some(_) => Err(GridError::DuplicateEndpoint(name)),
                None => Ok(first),
            }
        };
        let start = find(START_SYMBOL, "start")?;
        let goal = find(GOAL_SYMBOL, "goal")?;
        Scenario::new(grid, start, goal)
    }
}

/// Writes the map with `S` and `G` markers. When start and goal coincide only `S` is written,
/// and that text does not parse back into a [Scenario].
impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.rows() {
            let line: String = (0..self.grid.cols())
                .map(|col| {
                    let p = Coordinate::new(row, col);
                    if p == self.start {
                        START_SYMBOL
                    } else if p == self.goal {
                        GOAL_SYMBOL
                    } else if self.grid.get(p) {
                        BLOCKED_SYMBOL
                    } else {
                        FREE_SYMBOL
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
