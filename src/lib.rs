//! GL Pong - a two-player Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, objects, physics, collisions, scoring)
//! - `input`: Key table sampled once per frame
//! - `hud`: Score digit sprites
//! - `renderer`: Draw submission and texture loading seams
//! - `settings`: Data-driven match configuration
//! - `headless`: Frame loop used by the binary

pub mod headless;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{Controls, InputState, Key};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// The play field spans [-1, 1] vertically; all speeds are per frame.
pub mod consts {
    /// Vertical half-size of the play field
    pub const FIELD_HALF_HEIGHT: f64 = 1.0;
    /// Horizontal goal line; wider than the paddle field
    pub const X_LIMIT: f64 = 1.4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 0.1;
    pub const PADDLE_HEIGHT: f64 = 0.5;
    pub const PADDLE_SPEED: f64 = 0.02;
    /// Paddle centers sit at ±PADDLE_X
    pub const PADDLE_X: f64 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 0.1;
    pub const BALL_SPEED: f64 = 0.02;
    /// Serve direction, counter-clockwise from +x
    pub const SERVE_ANGLE_DEG: f64 = 40.0;
    /// Polygon subdivisions used to approximate the ball
    pub const BALL_SIDES: u32 = 32;
    /// Bounds for configurable polygon subdivisions
    pub const MIN_POLYGON_SIDES: u32 = 3;
    pub const MAX_POLYGON_SIDES: u32 = 36;

    /// Score digits
    pub const DIGIT_SIZE: f64 = 0.15;
    pub const DIGIT_ATLAS_COLUMNS: u32 = 10;
    pub const SCORE_ANCHOR_X: f64 = 0.5;
    pub const SCORE_ANCHOR_Y: f64 = 0.8;

    /// Frames simulated by the headless binary
    pub const HEADLESS_FRAMES: u64 = 600;
}

use glam::DVec2;

/// Unit direction for an angle in degrees (0 = +x, counter-clockwise)
#[inline]
pub fn direction_from_degrees(degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(theta.cos(), theta.sin())
}
