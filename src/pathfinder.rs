use crate::astar::astar;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::grid::OccupancyGrid;
use crate::path::Path;
use log::{info, warn};

/// Cost of a single orthogonal move.
pub const MOVE_COST: usize = 1;

/// Manhattan distance between `a` and `b`. Exact on an open grid with unit orthogonal moves,
/// hence admissible and consistent.
pub fn heuristic(a: &Coordinate, b: &Coordinate) -> usize {
    a.manhattan_distance(b) * MOVE_COST
}

/// Computes a shortest 4-connected path from `start` to `goal` with A*.
///
/// Returns an empty [Path] if the goal cannot be reached, which includes a blocked start or a
/// blocked goal. Fails with [GridError::OutOfBounds](crate::GridError::OutOfBounds) if either
/// endpoint is off the grid. Repeated calls with the same inputs return the same path.
pub fn find_path(grid: &OccupancyGrid, start: Coordinate, goal: Coordinate) -> Result<Path> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;
    if grid.is_blocked(start) {
        warn!("Start {} is blocked, nothing to search", start);
        return Ok(Path::empty());
    }
    if grid.is_blocked(goal) {
        warn!("Goal {} is blocked and will never be reached", goal);
    }
    let result = astar(
        &start,
        |node| {
            grid.neighborhood_points(node)
                .into_iter()
                .map(|p| (p, MOVE_COST))
        },
        |node| heuristic(node, &goal),
        |node| *node == goal,
    );
    match result {
        Some((steps, cost)) => {
            info!("Found path from {} to {} with {} moves", start, goal, cost);
            Ok(Path::new(steps))
        }
        None => {
            info!("{} is not reachable from {}", goal, start);
            Ok(Path::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = OccupancyGrid::new(1, 1, false);
        let start = Coordinate::new(0, 0);
        let path = find_path(&grid, start, start).unwrap();
        assert_eq!(path.to_vec(), vec![start]);
    }

    /// Asserts that the optimal 4 step solution is found around a central obstacle.
    #[test]
    fn solve_simple_problem() {
        let mut grid = OccupancyGrid::new(3, 3, false);
        grid.set(Coordinate::new(1, 1), true);
        let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.is_valid_on(&grid));
    }

    /// The row-major tie-break makes the route across an open grid hug the top row first.
    #[test]
    fn tie_break_is_pinned() {
        let grid = OccupancyGrid::new(3, 3, false);
        let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        let expected: Vec<Coordinate> = vec![
            (0, 0).into(),
            (0, 1).into(),
            (0, 2).into(),
            (1, 2).into(),
            (2, 2).into(),
        ];
        assert_eq!(path.into_vec(), expected);
    }

    #[test]
    fn obstacle_field() {
        let scenario: crate::Scenario = "\
            S.........
            .#...#....
            .#...#....
            .#...#....
            .#####....
            .......##.
            ######.#..
            .......#..
            .#######..
            .........G"
            .parse()
            .unwrap();
        let path = scenario.solve().unwrap();
        assert_eq!(path.len(), 19);
        assert!(path.is_valid_on(&scenario.grid));
    }

    #[test]
    fn blocked_endpoints_give_empty_path() {
        let mut grid = OccupancyGrid::new(3, 3, false);
        grid.set(Coordinate::new(0, 0), true);
        let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        assert!(path.is_empty());

        let mut grid = OccupancyGrid::new(3, 3, false);
        grid.set(Coordinate::new(2, 2), true);
        let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn out_of_bounds_fails_fast() {
        let grid = OccupancyGrid::new(3, 4, false);
        let err = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coordinate: Coordinate::new(3, 0),
                rows: 3,
                cols: 4
            }
        );
        assert!(find_path(&grid, Coordinate::new(0, 4), Coordinate::new(0, 0)).is_err());
    }
}
