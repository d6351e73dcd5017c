//! Rendering seam
//!
//! The simulation never talks to a graphics API. Each frame it hands world
//! vertices, UVs and a texture handle per shape to a `Renderer`; the
//! backend draws each shape as a triangle fan.

pub mod recording;
pub mod shapes;
pub mod texture;
pub mod vertex;

use glam::DVec2;

use crate::hud::ScoreBoard;
use crate::sim::{GameObject, GameState, Side};

pub use recording::{DrawCommand, RecordingRenderer};
pub use texture::{FsTextureLoader, TextureError, TextureHandle, TextureLoader, TextureSet};
pub use vertex::Vertex;

/// Graphics backend
pub trait Renderer {
    /// Draw one convex shape as a triangle fan
    ///
    /// `world_vertices` and `uvs` are index-aligned. An invalid texture
    /// draws the shape untextured.
    fn draw_shape(&mut self, world_vertices: &[DVec2], uvs: &[DVec2], texture: TextureHandle);
}

fn draw_object(renderer: &mut impl Renderer, object: &GameObject, texture: TextureHandle) {
    renderer.draw_shape(object.world_vertices(), object.uvs(), texture);
}

/// Draw a frame: paddles, ball, then both scores
pub fn draw_frame(
    state: &GameState,
    board: &ScoreBoard,
    textures: &TextureSet,
    renderer: &mut impl Renderer,
) {
    draw_object(renderer, &state.left.body, textures.paddle);
    draw_object(renderer, &state.right.body, textures.paddle);
    draw_object(renderer, &state.ball.body, textures.ball);

    for side in [Side::Left, Side::Right] {
        for digit in board.sprites(side) {
            draw_object(renderer, digit, textures.digits);
        }
    }

    log::trace!(
        "Frame {} drawn: {} digit sprites",
        state.frame,
        board.sprites(Side::Left).len() + board.sprites(Side::Right).len()
    );
}
