//! Triangle rasterization.
//!
//! A single bounding-box rasterizer fills screen-space triangles; the
//! barycentric formulation it uses is selectable at runtime so the two can
//! be compared and benchmarked.
//!
//! - [`BoundingBoxRasterizer`]: bounding box walk with a depth test
//! - [`BarycentricMethod`]: signed-area ratios or plane solve
//! - [`PixelShader`]: per-fragment color once the depth test passes

mod barycentric;
mod bounding_box;
mod shader;

pub use barycentric::{Barycentric, BarycentricMethod, PlaneSolve, SignedArea};
pub use bounding_box::BoundingBoxRasterizer;
pub use shader::{FlatShader, PixelShader, TextureShader};

use crate::math::{Vec2f, Vec3f};

/// A triangle ready for rasterization in screen space.
///
/// `points` carry pixel x/y plus the projected depth in z. `uvs` are the
/// per-corner texture coordinates, in the same order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3f; 3],
    pub uvs: [Vec2f; 3],
}

impl Triangle {
    pub fn new(points: [Vec3f; 3], uvs: [Vec2f; 3]) -> Self {
        Self { points, uvs }
    }
}
