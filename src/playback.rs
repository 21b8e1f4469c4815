use crate::coordinate::Coordinate;
use crate::path::Path;

/// Step-by-step replay of a [Path], owned by the animation loop. The robot starts on the first
/// cell and moves one cell per [tick](Playback::tick) until it rests on the last one.
#[derive(Clone, Debug, Default)]
pub struct Playback {
    path: Path,
    index: usize,
}

impl Playback {
    pub fn new(path: Path) -> Self {
        Playback { path, index: 0 }
    }

    /// Replaces the path, e.g. with the result of a fresh search, and rewinds to the first step.
    pub fn restart(&mut self, path: Path) {
        self.path = path;
        self.index = 0;
    }

    /// Advances one step and returns the robot's new position. Once finished the robot stays on
    /// the goal. Returns [None] for an empty path.
    pub fn tick(&mut self) -> Option<Coordinate> {
        if !self.is_finished() {
            self.index += 1;
        }
        self.robot()
    }

    pub fn robot(&self) -> Option<Coordinate> {
        self.path.get(self.index).copied()
    }

    /// Cells visited so far, including the robot's current cell.
    pub fn trail(&self) -> &[Coordinate] {
        if self.path.is_empty() {
            &[]
        } else {
            &self.path[..=self.index]
        }
    }

    pub fn step(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.path.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
