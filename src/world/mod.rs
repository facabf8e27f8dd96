mod gltf;

pub use gltf::load_gltf_triangles;

use glam::Vec3;

use crate::math::{intersect_triangle, Aabb};

/// One triangle of the static walkable geometry, with a flat color used
/// by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub color: [f32; 3],
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: [f32; 3]) -> Self {
        Self { v0, v1, v2, color }
    }

    pub fn normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0).normalize_or_zero()
    }
}

/// Result of the downward ground probe.
#[derive(Debug, Clone, Copy)]
pub struct GroundHit {
    /// Distance from the probe origin to the surface.
    pub distance: f32,
    /// World-space point where the probe met the surface.
    pub point: Vec3,
}

/// Static scene geometry the player walks on. Read-only once loaded;
/// `World::empty()` models the window of time before the asset arrives,
/// during which only the floor fallback applies.
#[derive(Debug, Clone, Default)]
pub struct World {
    triangles: Vec<Triangle>,
}

impl World {
    /// World with no geometry yet. Collision falls back to the flat floor.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn is_loaded(&self) -> bool {
        !self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Cast a ray straight down from `origin` and return the nearest hit.
    /// Scanning every triangle is fine at walkthrough scene sizes; swap in
    /// a spatial index if scenes grow past that.
    pub fn cast_downward(&self, origin: Vec3) -> Option<GroundHit> {
        let dir = Vec3::NEG_Y;
        let mut nearest: Option<f32> = None;

        for tri in &self.triangles {
            if let Some(t) = intersect_triangle(origin, dir, tri.v0, tri.v1, tri.v2) {
                if nearest.map_or(true, |best| t < best) {
                    nearest = Some(t);
                }
            }
        }

        nearest.map(|t| GroundHit {
            distance: t,
            point: origin + dir * t,
        })
    }

    /// Bounds of the loaded geometry, `None` when empty.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(
            self.triangles
                .iter()
                .flat_map(|t| [t.v0, t.v1, t.v2]),
        )
    }

    /// Center the scene at the origin and uniformly scale it so its
    /// largest dimension equals `target_size`. Mirrors how hand-authored
    /// assets of arbitrary scale are normalized before the walkthrough
    /// starts.
    pub fn fit_to_size(&mut self, target_size: f32) {
        let Some(bounds) = self.bounds() else {
            return;
        };

        let max_dim = bounds.max_dimension();
        if max_dim <= 0.0 {
            return;
        }

        let center = bounds.center();
        let scale = target_size / max_dim;

        for tri in &mut self.triangles {
            tri.v0 = (tri.v0 - center) * scale;
            tri.v1 = (tri.v1 - center) * scale;
            tri.v2 = (tri.v2 - center) * scale;
        }
    }
}
