//! Triangle-list expansion for convex vertex rings
//!
//! Shapes are submitted as triangle fans. Backends without a fan primitive
//! expand the ring into a plain triangle list.

use super::vertex::Vertex;

/// Expand a fan (shared first vertex) into a triangle list
///
/// A ring of N vertices yields N - 2 triangles; fewer than 3 vertices yield
/// nothing.
pub fn fan_to_triangle_list(ring: &[Vertex]) -> Vec<Vertex> {
    if ring.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((ring.len() - 2) * 3);
    let hub = ring[0];

    for pair in ring[1..].windows(2) {
        vertices.push(hub);
        vertices.push(pair[0]);
        vertices.push(pair[1]);
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::interleave;
    use crate::sim::Shape;
    use glam::DVec2;

    fn ring(shape: Shape) -> Vec<Vertex> {
        let geom = shape.generate();
        interleave(&geom.offsets, &geom.uvs)
    }

    #[test]
    fn test_quad_expands_to_two_triangles() {
        let quad = ring(Shape::rectangle(2.0, 2.0));
        let tris = fan_to_triangle_list(&quad);
        assert_eq!(tris.len(), 6);
        assert_eq!(tris[0], quad[0]);
        assert_eq!(tris[3], quad[0]);
        assert_eq!(tris[5], quad[3]);
    }

    #[test]
    fn test_polygon_triangle_count() {
        let poly = ring(Shape::polygon(32, 0.1));
        assert_eq!(fan_to_triangle_list(&poly).len(), 30 * 3);
    }

    #[test]
    fn test_degenerate_rings() {
        assert!(fan_to_triangle_list(&[]).is_empty());
        let two = interleave(&[DVec2::ZERO, DVec2::X], &[DVec2::ZERO, DVec2::X]);
        assert!(fan_to_triangle_list(&two).is_empty());
    }
}
