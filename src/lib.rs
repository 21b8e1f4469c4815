//! # grid_navigation
//!
//! A robot crossing a grid of scattered obstacles. The core is an
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search over a 4-connected
//! uniform-cost grid with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Around it
//! sit a random obstacle [generator], reachability checks through
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)), and a
//! [playback] state plus text [render]ing used by the terminal demo.
//!
//! ```
//! use grid_navigation::{find_path, Coordinate, OccupancyGrid};
//!
//! let mut grid = OccupancyGrid::new(3, 3, false);
//! grid.set(Coordinate::new(1, 1), true);
//! let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod astar;
pub mod components;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod generator;
pub mod grid;
pub mod path;
pub mod pathfinder;
pub mod playback;
pub mod render;

pub use components::Components;
pub use coordinate::Coordinate;
pub use error::{GridError, Result};
pub use grid::{OccupancyGrid, Scenario};
pub use path::Path;
pub use pathfinder::{find_path, heuristic};
pub use playback::Playback;
