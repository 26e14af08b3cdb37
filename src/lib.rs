//! # maze_pathfinding
//!
//! Generates [perfect mazes](https://en.wikipedia.org/wiki/Maze_generation_algorithm) on odd-sized
//! grids using
//! [randomized Prim's algorithm](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Iterative_randomized_Prim's_algorithm_(without_stack,_without_sets))
//! and finds shortest paths through any 4-connected walkable grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan heuristic. Note that
//! this assumes a uniform-cost grid without diagonal moves.
//!
//! Odd coordinates of a [MazeGrid](maze_grid::MazeGrid) are rooms, all other coordinates are
//! walls that may be carved away. Pathfinding only sees the grid through the
//! [Walkable](walkable::Walkable) trait, so it works equally well on a blocklist or any closure.
mod astar;
pub mod builder;
pub mod cell;
pub mod config;
pub mod error;
pub mod follower;
pub mod frontier;
pub mod maze_grid;
pub mod solver;
pub mod walkable;

pub use builder::{generate, MazeBuilder};
pub use cell::Cell;
pub use config::{FollowerConfig, MazeConfig};
pub use error::{MazeError, PathError};
pub use follower::{FollowState, PathFollower};
pub use grid_util::point::Point;
pub use maze_grid::MazeGrid;
pub use solver::GridPathfinder;
pub use walkable::{BlockedCells, Walkable, WalkableFn};

/// Smallest width or height a maze can have while still containing a room.
pub const MIN_DIMENSION: usize = 3;
/// Cost of a single cardinal step.
pub const STEP_COST: i32 = 1;
/// Forward, back, left and right on the grid plane.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
const N_SMALLVEC_SIZE: usize = 4;

/// Maps a grid coordinate onto the world plane, `(x, y)` becoming `(x, 0, y)`.
pub fn grid_to_world(point: Point, cell_size: f32) -> [f32; 3] {
    [point.x as f32 * cell_size, 0.0, point.y as f32 * cell_size]
}

/// Checks that every consecutive pair of points differs by exactly one cardinal step, starting
/// from `start`. Useful for validating a path from any source before handing it to a
/// [PathFollower], which moves in straight lines between waypoints.
pub fn is_contiguous(start: Point, path: &[Point]) -> bool {
    let mut current = start;
    for p in path {
        if current.manhattan_distance(p) != 1 {
            return false;
        }
        current = *p;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_mapping_uses_xz_plane() {
        assert_eq!(grid_to_world(Point::new(3, 5), 1.0), [3.0, 0.0, 5.0]);
        assert_eq!(grid_to_world(Point::new(3, 5), 2.0), [6.0, 0.0, 10.0]);
    }

    #[test]
    fn contiguity() {
        let start = Point::new(0, 0);
        assert!(is_contiguous(start, &[]));
        assert!(is_contiguous(
            start,
            &[Point::new(1, 0), Point::new(1, 1), Point::new(2, 1)]
        ));
        assert!(!is_contiguous(start, &[Point::new(1, 1)]));
        assert!(!is_contiguous(start, &[Point::new(2, 0)]));
    }
}
