//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, per-frame speeds
//! - No randomness
//! - No rendering, input-device or file dependencies

pub mod collision;
pub mod object;
pub mod physics;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{Aabb, PaddleContact, PaddleFace, overlaps, resolve_paddle_hit};
pub use object::GameObject;
pub use physics::{Ball, Paddle, PaddleCommand, Wall};
pub use shape::{Shape, ShapeGeometry};
pub use state::{GameEvent, GameState, MatchState, Side};
pub use tick::{FrameContext, TickInput, tick};
