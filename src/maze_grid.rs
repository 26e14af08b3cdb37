use crate::cell::Cell;
use crate::error::MazeError;
use crate::{grid_to_world, Point, CARDINAL_OFFSETS, MIN_DIMENSION};
use core::fmt;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

/// [MazeGrid] stores one [Cell] per position of an odd-sized grid. Positions with two odd
/// coordinates are rooms, every other position is a wall that may be carved into a passage.
/// Out-of-bounds positions are treated as walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Checks the odd-and-at-least-three rule shared by every maze.
pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION || width % 2 == 0 || height % 2 == 0 {
        Err(MazeError::InvalidDimension { width, height })
    } else {
        Ok(())
    }
}

impl MazeGrid {
    /// Creates a grid that consists entirely of unvisited walls.
    pub fn new(width: usize, height: usize) -> Result<MazeGrid, MazeError> {
        validate_dimensions(width, height)?;
        Ok(MazeGrid::filled(width, height))
    }
    /// Callers must have validated the dimensions.
    pub(crate) fn filled(width: usize, height: usize) -> MazeGrid {
        MazeGrid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    /// Rooms sit at odd coordinates.
    pub fn is_room(&self, point: &Point) -> bool {
        self.in_bounds(point) && point.x % 2 == 1 && point.y % 2 == 1
    }
    fn get_ix(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }
    fn get_ix_point(&self, point: &Point) -> usize {
        self.get_ix(point.x as usize, point.y as usize)
    }
    pub fn get(&self, point: &Point) -> Option<&Cell> {
        if self.in_bounds(point) {
            Some(&self.cells[self.get_ix_point(point)])
        } else {
            None
        }
    }
    pub(crate) fn get_mut(&mut self, point: &Point) -> Option<&mut Cell> {
        if self.in_bounds(point) {
            let ix = self.get_ix_point(point);
            Some(&mut self.cells[ix])
        } else {
            None
        }
    }
    pub fn is_wall(&self, point: &Point) -> bool {
        self.get(point).map_or(true, |c| c.is_wall)
    }
    pub fn is_passage(&self, point: &Point) -> bool {
        !self.is_wall(point)
    }
    pub fn is_visited(&self, point: &Point) -> bool {
        self.get(point).map_or(false, |c| c.is_visited)
    }
    /// Iterates over all positions with their cell, x major and y minor.
    pub fn cells(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        iproduct!(0..self.width, 0..self.height)
            .map(move |(x, y)| (Point::new(x as i32, y as i32), &self.cells[self.get_ix(x, y)]))
    }
    /// World space position of a grid position, see [grid_to_world].
    pub fn world_position(&self, point: Point, cell_size: f32) -> [f32; 3] {
        grid_to_world(point, cell_size)
    }
    /// Number of odd-coordinate rooms.
    pub fn room_count(&self) -> usize {
        (self.width / 2) * (self.height / 2)
    }
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visited).count()
    }
    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passage()).count()
    }

    /// Generates a [UnionFind] structure linking every passage to its passage neighbours. In a
    /// perfect maze all passages end up in a single component.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.width * self.height);
        for (point, cell) in self.cells() {
            if cell.is_wall {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            // Only looking forward is enough, the other directions are covered by the neighbour
            for (dx, dy) in CARDINAL_OFFSETS.iter().filter(|(dx, dy)| *dx + *dy > 0) {
                let n = Point::new(point.x + dx, point.y + dy);
                if self.is_passage(&n) {
                    components.union(parent_ix, self.get_ix_point(&n));
                }
            }
        }
        components
    }
    /// Counts the distinct passage components.
    pub fn component_count(&self) -> usize {
        let components = self.components();
        let mut labels = self
            .cells()
            .filter(|(_, c)| c.is_passage())
            .map(|(p, _)| components.find(self.get_ix_point(&p)))
            .collect::<Vec<usize>>();
        labels.sort_unstable();
        labels.dedup();
        debug!("Maze has {} passage components", labels.len());
        labels.len()
    }
    /// Checks if two passages are connected. Walls and out-of-bounds positions are never reachable.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_passage(start) && self.is_passage(goal) {
            self.components()
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            false
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| {
                    if self.cells[self.get_ix(x, y)].is_wall {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
