use crate::astar::astar;
use crate::error::{Endpoint, PathError};
use crate::walkable::Walkable;
use crate::{grid_to_world, Point, CARDINAL_OFFSETS, N_SMALLVEC_SIZE, STEP_COST};
use log::{info, warn};
use smallvec::SmallVec;

/// A* over the implicit graph of walkable points. Steps follow a fixed set of four cardinal
/// offsets with unit cost, and the
/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) is used as heuristic,
/// which is consistent for such moves and therefore yields shortest paths.
///
/// Each call to [find_path](Self::find_path) owns its own search state, so a single
/// [GridPathfinder] can serve concurrent queries against a shared walkability source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPathfinder {
    offsets: [Point; 4],
}

impl Default for GridPathfinder {
    fn default() -> GridPathfinder {
        GridPathfinder {
            offsets: CARDINAL_OFFSETS.map(|(dx, dy)| Point::new(dx, dy)),
        }
    }
}

impl GridPathfinder {
    pub fn new() -> GridPathfinder {
        GridPathfinder::default()
    }
    /// Uses a custom expansion order. The offsets have to be the four cardinal steps, each
    /// exactly once.
    pub fn with_offsets(offsets: [(i32, i32); 4]) -> Result<GridPathfinder, PathError> {
        // Four distinct unit steps can only be a permutation of the cardinal offsets
        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            if dx.abs() + dy.abs() != 1 || offsets[..i].contains(&(dx, dy)) {
                return Err(PathError::InvalidOffset { dx, dy });
            }
        }
        Ok(GridPathfinder {
            offsets: offsets.map(|(dx, dy)| Point::new(dx, dy)),
        })
    }
    pub fn offsets(&self) -> &[Point; 4] {
        &self.offsets
    }

    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2) * STEP_COST
    }

    fn successors<W: Walkable + ?Sized>(
        &self,
        walkable: &W,
        node: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.offsets
            .iter()
            .map(|o| Point::new(node.x + o.x, node.y + o.y))
            .filter(|p| walkable.is_walkable(p))
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Computes the shortest path from start to goal. The returned waypoints exclude the start
    /// and end with the goal. An empty sequence means the goal cannot be reached (or that start
    /// and goal coincide). Fails with [PathError::InvalidEndpoint] if either end is not walkable.
    pub fn find_path<W: Walkable + ?Sized>(
        &self,
        start: Point,
        goal: Point,
        walkable: &W,
    ) -> Result<Vec<Point>, PathError> {
        for (point, endpoint) in [(start, Endpoint::Start), (goal, Endpoint::Goal)] {
            if !walkable.is_walkable(&point) {
                warn!("Rejecting path request: {} {} is not walkable", endpoint, point);
                return Err(PathError::InvalidEndpoint { point, endpoint });
            }
        }
        let result = astar(
            &start,
            |node| self.successors(walkable, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((path, cost)) => {
                info!("Found path from {} to {} of cost {}", start, goal, cost);
                Ok(path.into_iter().skip(1).collect())
            }
            None => {
                info!("{} is not reachable from {}", goal, start);
                Ok(Vec::new())
            }
        }
    }

    /// Like [find_path](Self::find_path), with every waypoint mapped onto the world plane.
    pub fn find_world_path<W: Walkable + ?Sized>(
        &self,
        start: Point,
        goal: Point,
        walkable: &W,
        cell_size: f32,
    ) -> Result<Vec<[f32; 3]>, PathError> {
        Ok(self
            .find_path(start, goal, walkable)?
            .into_iter()
            .map(|p| grid_to_world(p, cell_size))
            .collect())
    }
}
