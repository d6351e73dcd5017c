//! Renderer that records draw calls instead of issuing them
//!
//! Used by the headless binary and by tests to observe what a frame draws.

use glam::DVec2;

use super::Renderer;
use super::shapes::fan_to_triangle_list;
use super::texture::TextureHandle;
use super::vertex::{Vertex, as_bytes, interleave};

/// One textured triangle fan
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub vertices: Vec<Vertex>,
    pub texture: TextureHandle,
}

impl DrawCommand {
    /// The fan expanded to a triangle list
    pub fn triangles(&self) -> Vec<Vertex> {
        fan_to_triangle_list(&self.vertices)
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    total_draws: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the running total
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Upload size of the recorded commands once expanded to triangle lists
    pub fn triangle_bytes(&self) -> usize {
        self.commands
            .iter()
            .map(|cmd| as_bytes(&cmd.triangles()).len())
            .sum()
    }

    /// Draw calls over the renderer's lifetime
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }
}

impl Renderer for RecordingRenderer {
    fn draw_shape(&mut self, world_vertices: &[DVec2], uvs: &[DVec2], texture: TextureHandle) {
        self.total_draws += 1;
        self.commands.push(DrawCommand {
            vertices: interleave(world_vertices, uvs),
            texture,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Shape;

    #[test]
    fn test_records_and_clears() {
        let geom = Shape::rectangle(1.0, 1.0).generate();
        let mut renderer = RecordingRenderer::new();

        renderer.draw_shape(&geom.offsets, &geom.uvs, TextureHandle(3));
        renderer.draw_shape(&geom.offsets, &geom.uvs, TextureHandle::INVALID);
        assert_eq!(renderer.commands().len(), 2);
        assert_eq!(renderer.commands()[0].texture, TextureHandle(3));
        assert_eq!(renderer.commands()[0].vertices.len(), 4);
        assert_eq!(renderer.commands()[0].triangles().len(), 6);
        // Two quads, six 16-byte vertices each
        assert_eq!(renderer.triangle_bytes(), 2 * 6 * 16);

        renderer.clear();
        assert!(renderer.commands().is_empty());
        assert_eq!(renderer.triangle_bytes(), 0);
        assert_eq!(renderer.total_draws(), 2);
    }
}
