//! Collision detection and response for axis-aligned boxes
//!
//! Both paddles and the ball collide as boxes. The ball keeps its square
//! box even though it is drawn as a polygon.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::physics::{Ball, Paddle};

/// Axis-aligned box spanning center ± half_extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: DVec2,
    pub half_extent: DVec2,
}

impl Aabb {
    pub fn new(center: DVec2, half_extent: DVec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    #[inline]
    pub fn min(&self) -> DVec2 {
        self.center - self.half_extent
    }

    #[inline]
    pub fn max(&self) -> DVec2 {
        self.center + self.half_extent
    }
}

/// Separating-axis test on both axes
///
/// Strict on each axis: boxes whose edges only touch do not overlap.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let gap = (a.center - b.center).abs();
    let reach = a.half_extent + b.half_extent;
    gap.x < reach.x && gap.y < reach.y
}

/// Which face of a paddle the ball was pushed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleFace {
    /// Face toward -x
    Left,
    /// Face toward +x
    Right,
}

/// Result of a resolved ball/paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    pub face: PaddleFace,
    /// Ball x after snapping flush to the face
    pub snapped_x: f64,
}

/// Resolve a ball/paddle overlap
///
/// The approach side comes from comparing the ball and paddle centers,
/// never from the sign of the ball direction. The ball is snapped flush to
/// that face and sent away from the paddle; its vertical direction is left
/// alone.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle) -> Option<PaddleContact> {
    let ball_box = ball.body.bounds();
    let paddle_box = paddle.body.bounds();

    if !overlaps(&ball_box, &paddle_box) {
        return None;
    }

    let reach = paddle_box.half_extent.x + ball_box.half_extent.x;
    let (face, snapped_x, away) = if ball_box.center.x < paddle_box.center.x {
        (PaddleFace::Left, paddle_box.center.x - reach, -1.0)
    } else {
        (PaddleFace::Right, paddle_box.center.x + reach, 1.0)
    };

    // Point away from the paddle; a ball already leaving keeps going
    ball.direction.x = ball.direction.x.abs() * away;
    ball.body.set_position(DVec2::new(snapped_x, ball_box.center.y));

    Some(PaddleContact { face, snapped_x })
}
