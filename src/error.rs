//! Error types for maze generation and pathfinding.
//!
//! A search that exhausts its open set is not an error: it yields an empty path.

use crate::Point;
use core::fmt;
use thiserror::Error;

/// Errors raised while setting up a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Width or height is even or smaller than [MIN_DIMENSION](crate::MIN_DIMENSION).
    #[error("invalid maze dimensions {width}x{height}: both must be odd and at least 3")]
    InvalidDimension { width: usize, height: usize },
}

/// Which end of a path request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Errors raised before a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The start or goal is not walkable (or lies outside the walkable area).
    #[error("{endpoint} ({}, {}) is not walkable", .point.x, .point.y)]
    InvalidEndpoint { point: Point, endpoint: Endpoint },
    /// A neighbour offset is not a single cardinal step, or appears more than once.
    #[error("offset ({dx}, {dy}) is not a distinct unit cardinal step")]
    InvalidOffset { dx: i32, dy: i32 },
}
