use crate::coordinate::Coordinate;
use crate::grid::{Scenario, BLOCKED_SYMBOL, FREE_SYMBOL, GOAL_SYMBOL, START_SYMBOL};
use crate::playback::Playback;

pub const TRAIL_SYMBOL: char = '*';
pub const ROBOT_SYMBOL: char = 'R';

/// What a single cell shows in a frame. Later variants draw over earlier ones: the trail covers
/// start and goal, the robot covers everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Free,
    Blocked,
    Start,
    Goal,
    Trail,
    Robot,
}

impl Tile {
    pub fn symbol(self) -> char {
        match self {
            Tile::Free => FREE_SYMBOL,
            Tile::Blocked => BLOCKED_SYMBOL,
            Tile::Start => START_SYMBOL,
            Tile::Goal => GOAL_SYMBOL,
            Tile::Trail => TRAIL_SYMBOL,
            Tile::Robot => ROBOT_SYMBOL,
        }
    }
}

/// Lays out one frame of the replay as rows of tiles. Endpoints and path cells outside the grid
/// are not drawn.
pub fn tiles(scenario: &Scenario, playback: &Playback) -> Vec<Vec<Tile>> {
    let grid = &scenario.grid;
    let mut rows = vec![vec![Tile::Free; grid.cols()]; grid.rows()];
    let mut paint = |p: Coordinate, tile: Tile| {
        if let Some(cell) = rows.get_mut(p.row).and_then(|row| row.get_mut(p.col)) {
            *cell = tile;
        }
    };
    for p in grid.coordinates() {
        if grid.is_blocked(p) {
            paint(p, Tile::Blocked);
        }
    }
    paint(scenario.start, Tile::Start);
    paint(scenario.goal, Tile::Goal);
    for &p in playback.trail() {
        paint(p, Tile::Trail);
    }
    if let Some(robot) = playback.robot() {
        paint(robot, Tile::Robot);
    }
    rows
}

/// Renders a frame as text, one line per grid row.
pub fn frame(scenario: &Scenario, playback: &Playback) -> String {
    let mut out = String::new();
    for row in tiles(scenario, playback) {
        out.extend(row.into_iter().map(Tile::symbol));
        out.push('\n');
    }
    out
}

/// One status line describing the replay progress.
pub fn status(playback: &Playback) -> String {
    let path = playback.path();
    if path.is_empty() {
        "No path found!".to_owned()
    } else if playback.is_finished() {
        format!("Goal reached in {} moves", path.cost())
    } else {
        format!("Step {}/{}", playback.step(), path.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::OccupancyGrid;
    use crate::path::Path;

    #[test]
    fn frame_draws_trail_and_robot() {
        let scenario: Scenario = "S#.\n...\n..G".parse().unwrap();
        let mut playback = Playback::new(scenario.solve().unwrap());
        assert_eq!(frame(&scenario, &playback), "R#.\n...\n..G\n");
        playback.tick();
        playback.tick();
        assert_eq!(frame(&scenario, &playback), "*#.\n*R.\n..G\n");
        assert_eq!(status(&playback), "Step 2/4");
    }

    #[test]
    fn unreachable_goal_shows_bare_map() {
        let scenario: Scenario = "S#.\n##.\n..G".parse().unwrap();
        let playback = Playback::new(scenario.solve().unwrap());
        assert_eq!(frame(&scenario, &playback), "S#.\n##.\n..G\n");
        assert_eq!(status(&playback), "No path found!");
    }

    #[test]
    fn endpoints_off_the_grid_are_skipped() {
        let scenario = Scenario {
            grid: OccupancyGrid::new(2, 3, false),
            start: Coordinate::new(0, 0),
            goal: Coordinate::new(5, 1),
        };
        let playback = Playback::new(Path::empty());
        assert_eq!(frame(&scenario, &playback), "S..\n...\n");
    }
}
