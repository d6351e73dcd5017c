//! Shape generation for sprite geometry
//!
//! A shape produces local-space vertex offsets (relative to the object
//! center) and a parallel list of texture coordinates. Vertices form a
//! convex ring suitable for a triangle fan.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Shape parameters for a sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Centered box of the given full width and height
    Rectangle { width: f64, height: f64 },
    /// Regular polygon inscribed in a circle of the given radius
    Polygon { sides: u32, radius: f64 },
}

/// Generated local-space geometry: offsets and UVs, index-aligned
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeGeometry {
    pub offsets: Vec<DVec2>,
    pub uvs: Vec<DVec2>,
}

impl Shape {
    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn polygon(sides: u32, radius: f64) -> Self {
        Shape::Polygon { sides, radius }
    }

    /// Generate offsets and UVs
    ///
    /// Rectangles wind top-left, top-right, bottom-right, bottom-left.
    /// Polygons start at angle 0 (+x) and proceed counter-clockwise.
    pub fn generate(&self) -> ShapeGeometry {
        match *self {
            Shape::Rectangle { width, height } => {
                let hw = width / 2.0;
                let hh = height / 2.0;
                let offsets = vec![
                    DVec2::new(-hw, hh),
                    DVec2::new(hw, hh),
                    DVec2::new(hw, -hh),
                    DVec2::new(-hw, -hh),
                ];
                let uvs = vec![
                    DVec2::new(0.0, 1.0),
                    DVec2::new(1.0, 1.0),
                    DVec2::new(1.0, 0.0),
                    DVec2::new(0.0, 0.0),
                ];
                ShapeGeometry { offsets, uvs }
            }
            Shape::Polygon { sides, radius } => {
                let mut offsets = Vec::with_capacity(sides as usize);
                let mut uvs = Vec::with_capacity(sides as usize);

                for i in 0..sides {
                    let theta = TAU * i as f64 / sides as f64;
                    let unit = DVec2::new(theta.cos(), theta.sin());
                    offsets.push(unit * radius);
                    // offset / (2r) + 0.5, written without the division so r = 0 stays finite
                    uvs.push(unit * 0.5 + DVec2::splat(0.5));
                }

                ShapeGeometry { offsets, uvs }
            }
        }
    }
}

impl ShapeGeometry {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Remap U into one column of a horizontal texture atlas
    ///
    /// Column `index` of `columns` spans u in [index/columns, (index+1)/columns].
    pub fn atlas_cell(mut self, index: u32, columns: u32) -> Self {
        let columns = columns.max(1) as f64;
        let u0 = index as f64 / columns;
        let width = 1.0 / columns;
        for uv in &mut self.uvs {
            uv.x = u0 + uv.x * width;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rectangle_winding() {
        let geom = Shape::rectangle(0.1, 0.5).generate();
        assert_eq!(geom.len(), 4);

        let tl = geom.offsets[0];
        let tr = geom.offsets[1];
        let br = geom.offsets[2];
        let bl = geom.offsets[3];
        assert!(tl.x < 0.0 && tl.y > 0.0);
        assert!(tr.x > 0.0 && tr.y > 0.0);
        assert!(br.x > 0.0 && br.y < 0.0);
        assert!(bl.x < 0.0 && bl.y < 0.0);
        assert!((tr.x - 0.05).abs() < EPS);
        assert!((tr.y - 0.25).abs() < EPS);

        assert_eq!(geom.uvs[0], DVec2::new(0.0, 1.0));
        assert_eq!(geom.uvs[2], DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_polygon_starts_on_positive_x_and_turns_ccw() {
        let geom = Shape::polygon(4, 2.0).generate();
        assert_eq!(geom.len(), 4);
        assert!((geom.offsets[0] - DVec2::new(2.0, 0.0)).length() < EPS);
        assert!((geom.offsets[1] - DVec2::new(0.0, 2.0)).length() < EPS);
        assert!((geom.offsets[2] - DVec2::new(-2.0, 0.0)).length() < EPS);

        // uv = offset / (2r) + 0.5
        assert!((geom.uvs[0] - DVec2::new(1.0, 0.5)).length() < EPS);
        assert!((geom.uvs[1] - DVec2::new(0.5, 1.0)).length() < EPS);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let shape = Shape::polygon(32, 0.1);
        assert_eq!(shape.generate(), shape.generate());
    }

    #[test]
    fn test_polygon_without_sides_is_empty() {
        let geom = Shape::polygon(0, 1.0).generate();
        assert!(geom.is_empty());
        assert!(geom.uvs.is_empty());
    }

    #[test]
    fn test_atlas_cell_remaps_u_only() {
        let geom = Shape::rectangle(0.15, 0.15).generate().atlas_cell(3, 10);
        assert!((geom.uvs[0].x - 0.3).abs() < EPS);
        assert!((geom.uvs[1].x - 0.4).abs() < EPS);
        assert!((geom.uvs[2].x - 0.4).abs() < EPS);
        assert!((geom.uvs[3].x - 0.3).abs() < EPS);
        assert_eq!(geom.uvs[0].y, 1.0);
        assert_eq!(geom.uvs[3].y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_rectangle_offsets_symmetric(w in 0.0f64..10.0, h in 0.0f64..10.0) {
            let geom = Shape::rectangle(w, h).generate();
            for o in &geom.offsets {
                prop_assert!(geom.offsets.iter().any(|p| (*p + *o).length() < EPS));
            }
        }

        #[test]
        fn prop_polygon_offsets_sum_to_zero(sides in 3u32..=64, radius in 0.001f64..10.0) {
            let geom = Shape::polygon(sides, radius).generate();
            prop_assert_eq!(geom.len(), sides as usize);
            let sum: DVec2 = geom.offsets.iter().copied().sum();
            prop_assert!(sum.length() < 1e-9 * radius.max(1.0) * sides as f64);
        }

        #[test]
        fn prop_polygon_uvs_in_unit_square(sides in 3u32..=36, radius in 0.001f64..10.0) {
            let geom = Shape::polygon(sides, radius).generate();
            for uv in &geom.uvs {
                prop_assert!(uv.x >= -EPS && uv.x <= 1.0 + EPS);
                prop_assert!(uv.y >= -EPS && uv.y <= 1.0 + EPS);
            }
        }
    }
}
