use maze_pathfinding::{BlockedCells, GridPathfinder, Point};

// In this example a path is found on a 6x6 open area with shape
//  ______
// |S     |
// |      |
// |  #   |
// |   #  |
// |      |
// |     E|
//  ______
// where
// - # marks a blocked cell
// - S marks the start
// - E marks the end

fn main() {
    let area = BlockedCells::new(6, 6).with_blocked([Point::new(2, 2), Point::new(3, 3)]);
    let start = Point::new(0, 0);
    let end = Point::new(5, 5);
    let solver = GridPathfinder::new();
    let path = solver.find_path(start, end, &area).unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
    println!("World waypoints:");
    for p in solver.find_world_path(start, end, &area, 1.0).unwrap() {
        println!("{:?}", p);
    }
}
