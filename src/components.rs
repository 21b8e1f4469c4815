use crate::coordinate::Coordinate;
use crate::grid::OccupancyGrid;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Connected components of the free cells of an [OccupancyGrid] under orthogonal moves. Answers
/// reachability queries without running a search.
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    cols: usize,
    rows: usize,
}

impl Components {
    /// Links every free cell to its free right and lower neighbour. Blocked cells end up in
    /// singleton components.
    pub fn new(grid: &OccupancyGrid) -> Self {
        debug!("Generating connected components");
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut components = UnionFind::new(rows * cols);
        for point in grid.coordinates() {
            if !grid.can_move_to(point) {
                continue;
            }
            let parent_ix = point.row * cols + point.col;
            [
                Coordinate::new(point.row, point.col + 1),
                Coordinate::new(point.row + 1, point.col),
            ]
            .into_iter()
            .filter(|p| grid.can_move_to(*p))
            .for_each(|p| {
                components.union(parent_ix, p.row * cols + p.col);
            });
        }
        Components {
            components,
            cols,
            rows,
        }
    }

    fn ix(&self, point: &Coordinate) -> Option<usize> {
        (point.row < self.rows && point.col < self.cols).then(|| point.row * self.cols + point.col)
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, point: &Coordinate) -> Option<usize> {
        self.ix(point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are on the same component. Always false for out of bounds
    /// coordinates. A blocked cell is only reachable from itself.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        match (self.ix(start), self.ix(goal)) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_generation() {
        let grid: OccupancyGrid = "\
            ..#..
            ..#..
            #####
            .....
        "
        .parse()
        .unwrap();
        let components = Components::new(&grid);
        assert!(components.reachable(&Coordinate::new(0, 0), &Coordinate::new(1, 1)));
        assert!(components.reachable(&Coordinate::new(0, 3), &Coordinate::new(1, 4)));
        assert!(!components.reachable(&Coordinate::new(0, 0), &Coordinate::new(0, 4)));
        assert!(!components.reachable(&Coordinate::new(1, 1), &Coordinate::new(3, 0)));
        assert!(!components.reachable(&Coordinate::new(0, 0), &Coordinate::new(9, 9)));
    }

    #[test]
    fn component_ids() {
        let grid: OccupancyGrid = "..#\n###\n.#.".parse().unwrap();
        let components = Components::new(&grid);
        let id = |row, col| components.get_component(&Coordinate::new(row, col));
        assert_eq!(id(0, 0), id(0, 1));
        assert_ne!(id(0, 0), id(2, 0));
        assert_ne!(id(2, 0), id(2, 2));
        assert_ne!(id(0, 2), id(0, 1));
        assert!(id(2, 2).is_some());
        assert_eq!(id(3, 0), None);
        assert_eq!(id(0, 3), None);
    }
}
