use crate::components::Components;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::grid::{OccupancyGrid, Scenario};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scatters obstacles over an empty grid. Each of the `obstacles` attempts blocks one uniformly
/// random cell unless it is the start or the goal, so repeats and skipped endpoints leave fewer
/// blocked cells than attempts.
pub struct ObstacleGenerator {
    rng: StdRng,
    obstacles: usize,
}

impl ObstacleGenerator {
    pub fn new(obstacles: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ObstacleGenerator { rng, obstacles }
    }

    /// Generates a `rows` x `cols` scenario. Fails if either endpoint is out of bounds.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Scenario> {
        let mut grid = OccupancyGrid::new(rows, cols, false);
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        for _ in 0..self.obstacles {
            let p = Coordinate::new(self.rng.gen_range(0..rows), self.rng.gen_range(0..cols));
            if p != start && p != goal {
                grid.set(p, true);
            }
        }
        debug!(
            "Placed {} obstacles from {} attempts",
            grid.blocked_count(),
            self.obstacles
        );
        Scenario::new(grid, start, goal)
    }

    /// Regenerates up to `max_attempts` times until the goal is reachable from the start. Returns
    /// the last layout, reachable or not.
    pub fn generate_reachable(
        &mut self,
        rows: usize,
        cols: usize,
        start: Coordinate,
        goal: Coordinate,
        max_attempts: usize,
    ) -> Result<Scenario> {
        let mut scenario = self.generate(rows, cols, start, goal)?;
        for attempt in 1..max_attempts {
            if Components::new(&scenario.grid).reachable(&start, &goal) {
                info!("Generated reachable layout after {} attempts", attempt);
                return Ok(scenario);
            }
            scenario = self.generate(rows, cols, start, goal)?;
        }
        if !Components::new(&scenario.grid).reachable(&start, &goal) {
            warn!(
                "No reachable layout within {} attempts, keeping the last one",
                max_attempts
            );
        }
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_stay_free() {
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(4, 4);
        // Enough attempts to hit every cell of a 5x5 grid with overwhelming probability.
        let mut generator = ObstacleGenerator::new(2_000, Some(7));
        let scenario = generator.generate(5, 5, start, goal).unwrap();
        assert!(!scenario.grid.is_blocked(start));
        assert!(!scenario.grid.is_blocked(goal));
        assert_eq!(scenario.grid.blocked_count(), 23);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(19, 19);
        let a = ObstacleGenerator::new(100, Some(42))
            .generate(20, 20, start, goal)
            .unwrap();
        let b = ObstacleGenerator::new(100, Some(42))
            .generate(20, 20, start, goal)
            .unwrap();
        assert_eq!(a, b);
        assert!(a.grid.blocked_count() <= 100);
    }

    #[test]
    fn reachable_layouts() {
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(9, 9);
        let mut generator = ObstacleGenerator::new(35, Some(3));
        for _ in 0..20 {
            let scenario = generator
                .generate_reachable(10, 10, start, goal, 1_000)
                .unwrap();
            assert!(Components::new(&scenario.grid).reachable(&start, &goal));
            assert!(!scenario.solve().unwrap().is_empty());
        }
    }

    #[test]
    fn out_of_bounds_endpoint() {
        let mut generator = ObstacleGenerator::new(10, Some(1));
        assert!(generator
            .generate(5, 5, Coordinate::new(0, 0), Coordinate::new(5, 5))
            .is_err());
    }
}
