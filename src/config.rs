//! Settings for maze generation and path following.

use crate::error::MazeError;
use crate::maze_grid::validate_dimensions;

/// Maze generation settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Grid width including the outer walls, must be odd
    pub width: usize,
    /// Grid height including the outer walls, must be odd
    pub height: usize,
    /// Fixed seed for reproducible mazes, [None] draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn validate(&self) -> Result<(), MazeError> {
        validate_dimensions(self.width, self.height)
    }
}

/// Path following settings
#[derive(Clone, Debug, PartialEq)]
pub struct FollowerConfig {
    /// Distance travelled per second (world units)
    pub speed: f32,
    /// Distance at which a waypoint counts as reached
    pub arrival_tolerance: f32,
    /// World size of one grid cell
    pub cell_size: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            arrival_tolerance: 0.1,
            cell_size: 1.0,
        }
    }
}
