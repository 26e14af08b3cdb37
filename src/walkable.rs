//! Walkability sources for the pathfinder.
//!
//! The pathfinder never looks at a grid directly; it only asks whether a point can be entered.
use crate::maze_grid::MazeGrid;
use crate::Point;
use fxhash::FxHashSet;

pub trait Walkable {
    fn is_walkable(&self, point: &Point) -> bool;
}

impl<T: Walkable + ?Sized> Walkable for &T {
    fn is_walkable(&self, point: &Point) -> bool {
        (**self).is_walkable(point)
    }
}

/// Passages are walkable, walls and anything outside the maze are not.
impl Walkable for MazeGrid {
    fn is_walkable(&self, point: &Point) -> bool {
        self.is_passage(point)
    }
}

/// Adapts any predicate. The predicate is responsible for bounding the area; an unbounded
/// predicate makes an unreachable goal search forever.
#[derive(Clone, Copy, Debug)]
pub struct WalkableFn<F>(pub F);

impl<F> Walkable for WalkableFn<F>
where
    F: Fn(&Point) -> bool,
{
    fn is_walkable(&self, point: &Point) -> bool {
        (self.0)(point)
    }
}

/// A bounded open area in which only the listed points are blocked.
#[derive(Clone, Debug, Default)]
pub struct BlockedCells {
    width: usize,
    height: usize,
    blocked: FxHashSet<Point>,
}

impl BlockedCells {
    pub fn new(width: usize, height: usize) -> BlockedCells {
        BlockedCells {
            width,
            height,
            blocked: FxHashSet::default(),
        }
    }
    pub fn with_blocked<I: IntoIterator<Item = Point>>(mut self, points: I) -> BlockedCells {
        self.blocked.extend(points);
        self
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Blocks or unblocks a point, returning whether anything changed.
    pub fn set_blocked(&mut self, point: Point, blocked: bool) -> bool {
        if blocked {
            self.blocked.insert(point)
        } else {
            self.blocked.remove(&point)
        }
    }
    pub fn is_blocked(&self, point: &Point) -> bool {
        self.blocked.contains(point)
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
}

impl Walkable for BlockedCells {
    fn is_walkable(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.is_blocked(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MazeBuilder;

    #[test]
    fn blocked_cells() {
        let mut cells = BlockedCells::new(6, 6).with_blocked([Point::new(2, 2), Point::new(3, 3)]);
        assert!(!cells.is_walkable(&Point::new(2, 2)));
        assert!(cells.is_walkable(&Point::new(2, 3)));
        assert!(!cells.is_walkable(&Point::new(6, 0)));
        assert!(!cells.is_walkable(&Point::new(0, -1)));
        assert!(cells.set_blocked(Point::new(2, 2), false));
        assert!(!cells.set_blocked(Point::new(2, 2), false));
        assert!(cells.is_walkable(&Point::new(2, 2)));
    }

    #[test]
    fn maze_walkability_follows_passages() {
        let maze = MazeBuilder::new(7, 7).unwrap().generate_seeded(3);
        for (p, cell) in maze.cells() {
            assert_eq!(maze.is_walkable(&p), !cell.is_wall);
        }
        assert!(!maze.is_walkable(&Point::new(-1, 1)));
        let by_ref: &dyn Walkable = &maze;
        assert!(by_ref.is_walkable(&Point::new(1, 1)));
    }

    #[test]
    fn closure() {
        let diagonal = WalkableFn(|p: &Point| p.x == p.y);
        assert!(diagonal.is_walkable(&Point::new(4, 4)));
        assert!(!diagonal.is_walkable(&Point::new(4, 3)));
    }
}
