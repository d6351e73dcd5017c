//! Positioned sprite with cached world-space vertices

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::shape::{Shape, ShapeGeometry};

/// A game object: local geometry, a world position and collision half-extent
///
/// The half-extent is independent of the visual geometry; callers keep the
/// two consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObject {
    geometry: ShapeGeometry,
    position: DVec2,
    half_extent: DVec2,
    /// position + geometry.offsets[i], refreshed on every move
    world: Vec<DVec2>,
}

impl GameObject {
    pub fn new(geometry: ShapeGeometry, position: DVec2, half_extent: DVec2) -> Self {
        let mut object = Self {
            world: Vec::with_capacity(geometry.len()),
            geometry,
            position,
            half_extent,
        };
        object.refresh_world();
        object
    }

    /// Build directly from shape parameters
    pub fn from_shape(shape: Shape, position: DVec2, half_extent: DVec2) -> Self {
        Self::new(shape.generate(), position, half_extent)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn half_extent(&self) -> DVec2 {
        self.half_extent
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
        self.refresh_world();
    }

    pub fn translate(&mut self, delta: DVec2) {
        self.set_position(self.position + delta);
    }

    /// Replace the geometry (e.g. a new atlas cell) keeping the position
    pub fn set_geometry(&mut self, geometry: ShapeGeometry) {
        self.geometry = geometry;
        self.refresh_world();
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    pub fn world_vertices(&self) -> &[DVec2] {
        &self.world
    }

    pub fn uvs(&self) -> &[DVec2] {
        &self.geometry.uvs
    }

    /// Collision box centered on the object
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.half_extent)
    }

    fn refresh_world(&mut self) {
        let position = self.position;
        self.world.clear();
        self.world
            .extend(self.geometry.offsets.iter().map(|o| position + *o));
    }
}
