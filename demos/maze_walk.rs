use maze_pathfinding::{FollowState, GridPathfinder, MazeBuilder, MazeConfig, PathFollower, Point};

// In this example a 21x21 maze is generated, a path is found between two opposite rooms and an
// agent walks it at 60 ticks per second. The maze is printed with
// - # marking a wall
// - . marking a passage

fn main() {
    let config = MazeConfig::default().with_seed(2024);
    let maze = MazeBuilder::from_config(&config).unwrap().build();
    println!("{}", maze);
    let start = Point::new(1, 1);
    let goal = Point::new(config.width as i32 - 2, config.height as i32 - 2);
    let path = GridPathfinder::new().find_path(start, goal, &maze).unwrap();
    println!("Path of {} steps:", path.len());
    for p in &path {
        println!("{:?}", p);
    }

    let mut follower = PathFollower::default();
    follower.follow(&path);
    let mut position = [start.x as f32, start.y as f32];
    let mut ticks = 0;
    while follower.state() != FollowState::Arrived {
        position = follower.advance(position, 1.0 / 60.0);
        ticks += 1;
    }
    println!("Arrived at {:?} after {} ticks", position, ticks);
}
