//! Perfect maze generation by randomized frontier growth, a grid flavour of
//! [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm).
//!
//! Carving starts from a random room. Every wall bordering the carved region is kept in a
//! [FrontierSet]; walls are drawn from it at random and knocked down whenever they separate a
//! visited room from an unvisited one. Each room is joined exactly once, so the passages form a
//! spanning tree over the rooms.
use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::frontier::FrontierSet;
use crate::maze_grid::{validate_dimensions, MazeGrid};
use crate::Point;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// Generates a perfect maze of the given odd dimensions using the supplied random source.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<MazeGrid, MazeError> {
    Ok(MazeBuilder::new(width, height)?.generate(rng))
}

#[derive(Clone, Debug)]
pub struct MazeBuilder {
    width: usize,
    height: usize,
    seed: Option<u64>,
}

impl MazeBuilder {
    /// Fails with [MazeError::InvalidDimension] if either dimension is even or below 3.
    pub fn new(width: usize, height: usize) -> Result<MazeBuilder, MazeError> {
        validate_dimensions(width, height)?;
        Ok(MazeBuilder {
            width,
            height,
            seed: None,
        })
    }
    pub fn from_config(config: &MazeConfig) -> Result<MazeBuilder, MazeError> {
        config.validate()?;
        Ok(MazeBuilder {
            width: config.width,
            height: config.height,
            seed: config.seed,
        })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Generates with the configured seed, or with the thread RNG if there is none.
    pub fn build(&self) -> MazeGrid {
        match self.seed {
            Some(seed) => self.generate_seeded(seed),
            None => self.generate(&mut rand::thread_rng()),
        }
    }
    /// Equal seeds always produce equal mazes.
    pub fn generate_seeded(&self, seed: u64) -> MazeGrid {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeGrid {
        info!("Generating {}x{} maze", self.width, self.height);
        let mut grid = MazeGrid::filled(self.width, self.height);
        let mut frontier = FrontierSet::new();

        let start = Point::new(
            2 * rng.gen_range(0..self.width / 2) as i32 + 1,
            2 * rng.gen_range(0..self.height / 2) as i32 + 1,
        );
        if let Some(cell) = grid.get_mut(&start) {
            cell.visit();
        }
        self.add_walls(&start, &mut frontier);

        let mut carved = 0;
        let mut discarded = 0;
        while let Some(wall) = frontier.take_random(rng) {
            if self.process_wall(&mut grid, &wall, &mut frontier) {
                carved += 1;
            } else {
                discarded += 1;
            }
        }
        debug!(
            "Frontier drained: {} walls carved, {} discarded",
            carved, discarded
        );
        info!(
            "Maze complete with {} of {} rooms visited",
            grid.visited_count(),
            grid.room_count()
        );
        grid
    }

    /// Pushes the walls around a room that lie strictly inside the outer boundary.
    fn add_walls(&self, room: &Point, frontier: &mut FrontierSet) {
        let (w, h) = (self.width as i32, self.height as i32);
        if room.x - 2 > 0 {
            frontier.push(Point::new(room.x - 1, room.y));
        }
        if room.x + 2 < w - 1 {
            frontier.push(Point::new(room.x + 1, room.y));
        }
        if room.y - 2 > 0 {
            frontier.push(Point::new(room.x, room.y - 1));
        }
        if room.y + 2 < h - 1 {
            frontier.push(Point::new(room.x, room.y + 1));
        }
    }

    /// The rooms a wall separates. An odd x means the rooms lie above and below, otherwise an odd
    /// y means they lie left and right.
    fn wall_neighbours(&self, wall: &Point) -> SmallVec<[Point; 2]> {
        let candidates = if wall.x % 2 == 1 {
            [Point::new(wall.x, wall.y - 1), Point::new(wall.x, wall.y + 1)]
        } else if wall.y % 2 == 1 {
            [Point::new(wall.x - 1, wall.y), Point::new(wall.x + 1, wall.y)]
        } else {
            return SmallVec::new();
        };
        candidates
            .into_iter()
            .filter(|p| {
                p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
            })
            .collect()
    }

    /// Carves the wall if it joins the visited region to a new room. Returns whether anything
    /// was carved.
    fn process_wall(&self, grid: &mut MazeGrid, wall: &Point, frontier: &mut FrontierSet) -> bool {
        let neighbours = self.wall_neighbours(wall);
        if neighbours.len() != 2 {
            return false;
        }
        let (a, b) = (neighbours[0], neighbours[1]);
        let a_visited = grid.is_visited(&a);
        if a_visited == grid.is_visited(&b) {
            // Both rooms were already joined through another wall
            return false;
        }
        let fresh = if a_visited { b } else { a };
        if let Some(cell) = grid.get_mut(wall) {
            cell.is_wall = false;
        }
        if let Some(cell) = grid.get_mut(&fresh) {
            cell.visit();
        }
        self.add_walls(&fresh, frontier);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts passages reachable from `start` with a plain flood fill.
    fn flood_fill(grid: &MazeGrid, start: Point) -> Vec<Point> {
        let mut seen = vec![start];
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            for (dx, dy) in crate::CARDINAL_OFFSETS {
                let n = Point::new(p.x + dx, p.y + dy);
                if grid.is_passage(&n) && !seen.contains(&n) {
                    seen.push(n);
                    stack.push(n);
                }
            }
        }
        seen
    }

    #[test]
    fn rejects_even_and_small_dimensions() {
        assert!(MazeBuilder::new(4, 5).is_err());
        assert!(MazeBuilder::new(5, 4).is_err());
        assert!(MazeBuilder::new(1, 1).is_err());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(2, 9, &mut rng),
            Err(MazeError::InvalidDimension {
                width: 2,
                height: 9
            })
        );
    }

    #[test]
    fn smallest_maze_is_a_single_room() {
        let grid = MazeBuilder::new(3, 3).unwrap().generate_seeded(1);
        assert_eq!(grid.passage_count(), 1);
        assert!(grid.is_passage(&Point::new(1, 1)));
        assert_eq!(grid.to_string(), "###\n#.#\n###\n");
    }

    #[test]
    fn visits_all_rooms_of_default_maze() {
        let grid = MazeBuilder::new(21, 21).unwrap().generate_seeded(42);
        // Rooms sit at x, y in 1, 3, .., 19
        assert_eq!(grid.room_count(), 100);
        assert_eq!(grid.visited_count(), 100);
        assert_eq!(grid.visited_count(), grid.room_count());
    }

    #[test]
    fn spanning_tree() {
        for (w, h, seed) in [(5, 5, 0), (7, 3, 1), (3, 9, 2), (11, 15, 3), (21, 21, 4)] {
            let grid = MazeBuilder::new(w, h).unwrap().generate_seeded(seed);
            let rooms = grid.room_count();
            // Carved walls are the passages that are not rooms
            assert_eq!(grid.passage_count() - rooms, rooms - 1);
            let reached = flood_fill(&grid, Point::new(1, 1));
            assert_eq!(reached.len(), grid.passage_count());
            assert_eq!(reached.iter().filter(|p| grid.is_room(p)).count(), rooms);
        }
    }

    #[test]
    fn wall_orientation() {
        let builder = MazeBuilder::new(7, 7).unwrap();
        assert_eq!(
            builder.wall_neighbours(&Point::new(3, 2)).as_slice(),
            &[Point::new(3, 1), Point::new(3, 3)]
        );
        assert_eq!(
            builder.wall_neighbours(&Point::new(2, 3)).as_slice(),
            &[Point::new(1, 3), Point::new(3, 3)]
        );
        assert!(builder.wall_neighbours(&Point::new(2, 2)).is_empty());
        // Boundary walls only see one room
        assert_eq!(builder.wall_neighbours(&Point::new(3, 0)).len(), 1);
    }

    #[test]
    fn stale_wall_is_discarded() {
        let builder = MazeBuilder::new(5, 3).unwrap();
        let mut grid = MazeGrid::filled(5, 3);
        let mut frontier = FrontierSet::new();
        grid.get_mut(&Point::new(1, 1)).unwrap().visit();
        grid.get_mut(&Point::new(3, 1)).unwrap().visit();
        assert!(!builder.process_wall(&mut grid, &Point::new(2, 1), &mut frontier));
        assert!(grid.is_wall(&Point::new(2, 1)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn seed_from_config() {
        let config = MazeConfig::new(9, 9).with_seed(5);
        let builder = MazeBuilder::from_config(&config).unwrap();
        assert_eq!(builder.build(), builder.generate_seeded(5));
        assert!(MazeBuilder::from_config(&MazeConfig::new(8, 9)).is_err());
    }
}
