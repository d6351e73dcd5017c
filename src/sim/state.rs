//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here; nothing is global.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::physics::{Ball, Paddle};
use super::shape::Shape;
use crate::direction_from_degrees;
use crate::settings::MatchSettings;

/// One of the two players, and the half of the field they defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Per-side score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchState {
    pub left: u32,
    pub right: u32,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a goal against `side`; its opponent scores
    ///
    /// Returns the scoring side. There is no win condition.
    pub fn on_goal(&mut self, side: Side) -> Side {
        let scorer = side.opponent();
        match scorer {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
        scorer
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle on `side`
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom of the field
    WallBounce,
    /// `scorer` scored; totals after the goal
    Goal { scorer: Side, left: u32, right: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Parameters the objects were built from
    pub config: MatchSettings,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: MatchState,
    /// Simulation frame counter
    pub frame: u64,
}

impl GameState {
    /// Build the field: paddles at ±paddle_x, ball at the center
    pub fn new(config: &MatchSettings) -> Self {
        let paddle_size = DVec2::new(config.paddle_width, config.paddle_height);
        let left = Paddle::new(
            DVec2::new(-config.paddle_x, 0.0),
            paddle_size,
            config.paddle_speed,
            config.field_half_height,
        );
        let right = Paddle::new(
            DVec2::new(config.paddle_x, 0.0),
            paddle_size,
            config.paddle_speed,
            config.field_half_height,
        );
        let ball = Ball::new(
            Shape::polygon(config.ball_sides, config.ball_radius),
            DVec2::ZERO,
            DVec2::splat(config.ball_radius),
            direction_from_degrees(config.serve_angle_deg),
            config.ball_speed,
            config.ball_radius,
        );

        Self {
            config: config.clone(),
            left,
            right,
            ball,
            score: MatchState::new(),
            frame: 0,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
