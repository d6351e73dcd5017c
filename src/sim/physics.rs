//! Ball integration, wall reflection and paddle movement
//!
//! Speeds are distances per frame; the simulation is frame-stepped.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::object::GameObject;
use super::shape::Shape;
use super::state::Side;

/// Horizontal wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// The ball: always in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: GameObject,
    /// Unit (or near-unit) travel direction; never renormalized
    pub direction: DVec2,
    pub speed: f64,
    /// Radius used for the wall limits
    pub radius: f64,
}

impl Ball {
    pub fn new(
        shape: Shape,
        position: DVec2,
        half_extent: DVec2,
        direction: DVec2,
        speed: f64,
        radius: f64,
    ) -> Self {
        Self {
            body: GameObject::from_shape(shape, position, half_extent),
            direction,
            speed,
            radius,
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.body.position()
    }

    /// position += direction * speed
    pub fn integrate(&mut self) {
        self.body.translate(self.direction * self.speed);
    }

    /// Invert the vertical direction when past ±limit and still heading out
    ///
    /// Only an outward-moving ball is reflected, so a ball that starts
    /// beyond the limit turns around once instead of flipping every frame.
    pub fn reflect_off_walls(&mut self, limit: f64) -> Option<Wall> {
        let y = self.position().y;
        if y > limit && self.direction.y > 0.0 {
            self.direction.y = -self.direction.y;
            Some(Wall::Top)
        } else if y < -limit && self.direction.y < 0.0 {
            self.direction.y = -self.direction.y;
            Some(Wall::Bottom)
        } else {
            None
        }
    }

    /// Integrate, then reflect against the field's top and bottom
    pub fn advance(&mut self, field_half_height: f64) -> Option<Wall> {
        self.integrate();
        self.reflect_off_walls(field_half_height - self.radius)
    }

    /// Side whose goal line the ball has crossed, if any
    pub fn crossed_goal(&self, x_limit: f64) -> Option<Side> {
        let x = self.position().x;
        if x > x_limit {
            Some(Side::Right)
        } else if x < -x_limit {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Back to the center, heading the other way
    pub fn serve(&mut self) {
        self.body.set_position(DVec2::ZERO);
        self.direction.x = -self.direction.x;
    }
}

/// Per-frame paddle intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleCommand {
    Up,
    Down,
    #[default]
    Hold,
}

impl PaddleCommand {
    /// Up wins when both keys are held
    pub fn from_keys(up: bool, down: bool) -> Self {
        if up {
            PaddleCommand::Up
        } else if down {
            PaddleCommand::Down
        } else {
            PaddleCommand::Hold
        }
    }
}

/// A vertical paddle confined to the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: GameObject,
    /// Distance moved per frame while a key is held
    pub speed: f64,
    /// |y| never exceeds this: field half-height minus paddle half-height
    pub limit: f64,
}

impl Paddle {
    /// `size` is the full width and height of the paddle
    pub fn new(position: DVec2, size: DVec2, speed: f64, field_half_height: f64) -> Self {
        let half_extent = size / 2.0;
        let limit = (field_half_height - half_extent.y).max(0.0);
        let start = DVec2::new(position.x, position.y.clamp(-limit, limit));
        let body = GameObject::from_shape(Shape::rectangle(size.x, size.y), start, half_extent);
        Self { body, speed, limit }
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.body.position().y
    }

    /// Shift vertically, clamped to the field
    pub fn move_by(&mut self, dy: f64) {
        let pos = self.body.position();
        let y = (pos.y + dy).clamp(-self.limit, self.limit);
        self.body.set_position(DVec2::new(pos.x, y));
    }

    pub fn apply(&mut self, command: PaddleCommand) {
        match command {
            PaddleCommand::Up => self.move_by(self.speed),
            PaddleCommand::Down => self.move_by(-self.speed),
            PaddleCommand::Hold => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball(pos: DVec2, direction: DVec2) -> Ball {
        Ball::new(Shape::polygon(32, 0.1), pos, DVec2::splat(0.1), direction, 0.02, 0.1)
    }

    #[test]
    fn test_integrate_moves_along_direction() {
        let mut b = ball(DVec2::ZERO, DVec2::new(0.6, 0.8));
        b.integrate();
        assert!((b.position() - DVec2::new(0.012, 0.016)).length() < 1e-12);
    }

    #[test]
    fn test_wall_reflection_turns_ball_back() {
        let mut b = ball(DVec2::new(0.0, 0.95), DVec2::new(0.0, 1.0));
        let wall = b.advance(1.0);
        assert_eq!(wall, Some(Wall::Top));
        assert_eq!(b.direction.y, -1.0);

        let y0 = b.position().y;
        assert_eq!(b.advance(1.0), None);
        let y1 = b.position().y;
        assert_eq!(b.advance(1.0), None);
        assert!(y1 < y0);
        assert!(b.position().y < y1);
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let mut b = ball(DVec2::new(0.3, -0.89), DVec2::new(0.6, -0.8));
        assert_eq!(b.advance(1.0), Some(Wall::Bottom));
        assert!((b.direction.y - 0.8).abs() < 1e-12);
        // Horizontal component untouched
        assert!((b.direction.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_no_reflection_inside_field() {
        let mut b = ball(DVec2::new(0.0, 0.5), DVec2::new(0.0, 1.0));
        assert_eq!(b.advance(1.0), None);
        assert_eq!(b.direction.y, 1.0);
    }

    #[test]
    fn test_crossed_goal() {
        let b = ball(DVec2::new(1.41, 0.0), DVec2::X);
        assert_eq!(b.crossed_goal(1.4), Some(Side::Right));
        let b = ball(DVec2::new(-1.41, 0.0), DVec2::X);
        assert_eq!(b.crossed_goal(1.4), Some(Side::Left));
        let b = ball(DVec2::new(1.4, 0.0), DVec2::X);
        assert_eq!(b.crossed_goal(1.4), None);
    }

    #[test]
    fn test_serve_recenters_and_flips_x() {
        let mut b = ball(DVec2::new(1.5, 0.3), DVec2::new(0.6, 0.8));
        b.serve();
        assert_eq!(b.position(), DVec2::ZERO);
        assert_eq!(b.direction, DVec2::new(-0.6, 0.8));
        assert!((b.body.world_vertices()[0] - DVec2::new(0.1, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_paddle_command_up_has_priority() {
        assert_eq!(PaddleCommand::from_keys(true, true), PaddleCommand::Up);
        assert_eq!(PaddleCommand::from_keys(true, false), PaddleCommand::Up);
        assert_eq!(PaddleCommand::from_keys(false, true), PaddleCommand::Down);
        assert_eq!(PaddleCommand::from_keys(false, false), PaddleCommand::Hold);
    }

    #[test]
    fn test_paddle_moves_and_clamps() {
        let mut p = Paddle::new(DVec2::new(-1.0, 0.0), DVec2::new(0.1, 0.5), 0.02, 1.0);
        assert_eq!(p.limit, 0.75);

        p.apply(PaddleCommand::Up);
        assert!((p.y() - 0.02).abs() < 1e-12);
        p.apply(PaddleCommand::Down);
        p.apply(PaddleCommand::Down);
        assert!((p.y() + 0.02).abs() < 1e-12);

        for _ in 0..100 {
            p.apply(PaddleCommand::Up);
        }
        assert_eq!(p.y(), 0.75);
        // x is never touched
        assert_eq!(p.body.position().x, -1.0);
    }

    #[test]
    fn test_paddle_starting_outside_is_clamped() {
        let p = Paddle::new(DVec2::new(1.0, 2.0), DVec2::new(0.1, 0.5), 0.02, 1.0);
        assert_eq!(p.y(), 0.75);
    }

    fn arb_command() -> impl Strategy<Value = PaddleCommand> {
        prop_oneof![
            Just(PaddleCommand::Up),
            Just(PaddleCommand::Down),
            Just(PaddleCommand::Hold),
        ]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_field(
            commands in prop::collection::vec(arb_command(), 0..400),
            height in 0.05f64..1.5,
            speed in 0.001f64..0.2,
        ) {
            let mut p = Paddle::new(DVec2::new(1.0, 0.0), DVec2::new(0.1, height), speed, 1.0);
            let limit = (1.0 - height / 2.0).max(0.0);
            for cmd in commands {
                p.apply(cmd);
                prop_assert!(p.y() >= -limit && p.y() <= limit);
            }
        }
    }
}
