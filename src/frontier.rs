use crate::Point;
use rand::Rng;

/// Unordered multiset of wall positions bordering the carved region. The same wall may be pushed
/// more than once when it touches several visited rooms; consumers skip walls that no longer
/// separate a visited room from an unvisited one.
#[derive(Clone, Debug, Default)]
pub struct FrontierSet {
    walls: Vec<Point>,
}

impl FrontierSet {
    pub fn new() -> FrontierSet {
        FrontierSet::default()
    }
    pub fn push(&mut self, wall: Point) {
        self.walls.push(wall);
    }
    pub fn len(&self) -> usize {
        self.walls.len()
    }
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
    /// Removes a uniformly chosen entry in constant time. The order of the remaining entries is
    /// not preserved.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Point> {
        if self.walls.is_empty() {
            return None;
        }
        let ix = rng.gen_range(0..self.walls.len());
        Some(self.walls.swap_remove(ix))
    }
}
