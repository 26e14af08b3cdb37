//! Moves an agent along a computed path one tick at a time.
//!
//! The waypoint sequence is never mutated while following; the follower only advances an index
//! into it, so the active plan can be inspected at any point.
use crate::config::FollowerConfig;
use crate::{grid_to_world, Point};
use log::{debug, info};

/// Where the follower is in its plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// No plan, or the last plan had no waypoints
    Idle,
    /// Heading for the waypoint at `next`
    Following { next: usize },
    /// Every waypoint has been reached
    Arrived,
}

#[derive(Clone, Debug)]
pub struct PathFollower {
    config: FollowerConfig,
    waypoints: Vec<[f32; 2]>,
    state: FollowState,
}

fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt()
}

impl PathFollower {
    pub fn new(config: FollowerConfig) -> PathFollower {
        PathFollower {
            config,
            waypoints: Vec::new(),
            state: FollowState::Idle,
        }
    }
    pub fn config(&self) -> &FollowerConfig {
        &self.config
    }
    pub fn state(&self) -> FollowState {
        self.state
    }
    /// The active plan on the world plane, as `(x, z)` pairs.
    pub fn waypoints(&self) -> &[[f32; 2]] {
        &self.waypoints
    }
    /// Replaces whatever plan was in flight. Grid points are scaled by the configured cell size.
    pub fn follow(&mut self, path: &[Point]) {
        let cell_size = self.config.cell_size;
        self.waypoints = path
            .iter()
            .map(|p| {
                let [x, _, z] = grid_to_world(*p, cell_size);
                [x, z]
            })
            .collect();
        self.state = if self.waypoints.is_empty() {
            FollowState::Idle
        } else {
            FollowState::Following { next: 0 }
        };
        info!("Following new plan of {} waypoints", self.waypoints.len());
    }
    pub fn stop(&mut self) {
        self.waypoints.clear();
        self.state = FollowState::Idle;
    }
    pub fn current_target(&self) -> Option<[f32; 2]> {
        match self.state {
            FollowState::Following { next } => self.waypoints.get(next).copied(),
            _ => None,
        }
    }
    /// Waypoints still to be reached, including the current target.
    pub fn remaining(&self) -> &[[f32; 2]] {
        match self.state {
            FollowState::Following { next } => &self.waypoints[next..],
            _ => &[],
        }
    }

    /// Moves `position` toward the current target by at most `speed * dt` and returns the new
    /// position. Reaching a waypoint within the arrival tolerance advances to the next one.
    pub fn advance(&mut self, position: [f32; 2], dt: f32) -> [f32; 2] {
        let FollowState::Following { next } = self.state else {
            return position;
        };
        let target = self.waypoints[next];
        let remaining = distance(position, target);
        let step = self.config.speed * dt;
        let new_position = if remaining <= step {
            target
        } else {
            let scale = step / remaining;
            [
                position[0] + (target[0] - position[0]) * scale,
                position[1] + (target[1] - position[1]) * scale,
            ]
        };
        if distance(new_position, target) <= self.config.arrival_tolerance {
            if next + 1 < self.waypoints.len() {
                debug!("Reached waypoint {} of {}", next + 1, self.waypoints.len());
                self.state = FollowState::Following { next: next + 1 };
            } else {
                info!("Arrived at final waypoint");
                self.state = FollowState::Arrived;
            }
        }
        new_position
    }
}

impl Default for PathFollower {
    fn default() -> PathFollower {
        PathFollower::new(FollowerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_idles() {
        let mut follower = PathFollower::default();
        follower.follow(&[]);
        assert_eq!(follower.state(), FollowState::Idle);
        assert_eq!(follower.advance([1.0, 1.0], 0.5), [1.0, 1.0]);
        assert!(follower.current_target().is_none());
    }

    #[test]
    fn walks_to_arrival() {
        let mut follower = PathFollower::new(FollowerConfig {
            speed: 1.0,
            arrival_tolerance: 0.1,
            cell_size: 1.0,
        });
        follower.follow(&[Point::new(1, 0), Point::new(1, 1)]);
        assert_eq!(follower.current_target(), Some([1.0, 0.0]));
        let mut position = [0.0, 0.0];
        position = follower.advance(position, 0.5);
        assert_eq!(position, [0.5, 0.0]);
        assert_eq!(follower.state(), FollowState::Following { next: 0 });
        position = follower.advance(position, 0.5);
        assert_eq!(position, [1.0, 0.0]);
        assert_eq!(follower.state(), FollowState::Following { next: 1 });
        assert_eq!(follower.remaining(), &[[1.0, 1.0]]);
        // No overshoot even with a large tick
        position = follower.advance(position, 10.0);
        assert_eq!(position, [1.0, 1.0]);
        assert_eq!(follower.state(), FollowState::Arrived);
        assert_eq!(follower.advance(position, 1.0), position);
        // The plan stays inspectable after arrival
        assert_eq!(follower.waypoints().len(), 2);
    }

    #[test]
    fn zero_tolerance_still_arrives() {
        let mut follower = PathFollower::new(FollowerConfig {
            speed: 1.0,
            arrival_tolerance: 0.0,
            cell_size: 1.0,
        });
        follower.follow(&[Point::new(1, 0)]);
        let position = follower.advance([0.0, 0.0], 1.0);
        assert_eq!(position, [1.0, 0.0]);
        assert_eq!(follower.state(), FollowState::Arrived);
    }

    #[test]
    fn new_plan_supersedes_old() {
        let mut follower = PathFollower::default();
        follower.follow(&[Point::new(5, 5), Point::new(5, 6)]);
        follower.advance([0.0, 0.0], 0.1);
        follower.follow(&[Point::new(0, 1)]);
        assert_eq!(follower.state(), FollowState::Following { next: 0 });
        assert_eq!(follower.current_target(), Some([0.0, 1.0]));
        follower.stop();
        assert_eq!(follower.state(), FollowState::Idle);
        assert!(follower.waypoints().is_empty());
    }

    #[test]
    fn cell_size_scales_waypoints() {
        let mut follower = PathFollower::new(FollowerConfig {
            cell_size: 2.5,
            ..FollowerConfig::default()
        });
        follower.follow(&[Point::new(2, 3)]);
        assert_eq!(follower.waypoints(), &[[5.0, 7.5]]);
    }
}
