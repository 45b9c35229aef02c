//! Directional light and flat Lambertian shading.

use crate::math::Vec3f;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// All rays are parallel, so a flat triangle receives one intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Unit direction, compared directly against face normals.
    pub direction: Vec3f,
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized.
    pub fn new(direction: Vec3f) -> Self {
        Self {
            direction: direction.normalized(),
        }
    }

    /// Unit normal `(v2 - v0) × (v1 - v0)` of a model-space triangle, or
    /// `None` if the triangle has no area.
    pub fn face_normal([v0, v1, v2]: [Vec3f; 3]) -> Option<Vec3f> {
        let normal = (v2 - v0).cross(v1 - v0);
        (normal.norm() > f32::EPSILON).then(|| normal.normalized())
    }

    /// Flat intensity of a triangle given its model-space vertices.
    ///
    /// The intensity is the face normal dotted with the light direction, in
    /// [-1, 1]. A degenerate triangle has no normal and gets 0.
    pub fn face_intensity(&self, vertices: [Vec3f; 3]) -> f32 {
        Self::face_normal(vertices).map_or(0.0, |n| n.dot(self.direction))
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3f::BACK)
    }
}
