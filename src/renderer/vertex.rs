//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// 2D vertex with position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }
}

/// Zip world positions and UVs into GPU vertices
///
/// Extra entries on either side are ignored.
pub fn interleave(world: &[DVec2], uvs: &[DVec2]) -> Vec<Vertex> {
    world
        .iter()
        .zip(uvs)
        .map(|(p, uv)| {
            let p = p.as_vec2();
            let uv = uv.as_vec2();
            Vertex::new(p.x, p.y, uv.x, uv.y)
        })
        .collect()
}

/// View a vertex slice as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
