/// The maze state of a single grid position. Every cell starts out as an unvisited wall and is
/// only changed while a maze is being carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub is_wall: bool,
    pub is_visited: bool,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            is_wall: true,
            is_visited: false,
        }
    }
}

impl Cell {
    pub fn is_passage(&self) -> bool {
        !self.is_wall
    }
    /// Marks a room as reached by the carving front.
    pub(crate) fn visit(&mut self) {
        self.is_visited = true;
        self.is_wall = false;
    }
}
