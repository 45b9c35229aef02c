//! Model space to screen space.
//!
//! Two variants share one contract: a model-space vertex goes in, a screen
//! point comes out with x/y in pixels and z kept as a depth proxy where a
//! larger value is closer to the viewer.
//!
//! - [`ProjectionKind::Orthographic`] maps [-1, 1] straight onto the image.
//! - [`ProjectionKind::Perspective`] runs the matrix chain
//!   `viewport * projection * [x y z 1]ᵀ` and divides by w. The camera sits
//!   on the +z axis at `camera_z` looking down -z; no model or view matrix
//!   is applied.

use serde::{Deserialize, Serialize};

use crate::math::{Matrix, Vec3f};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Orthographic,
    #[default]
    Perspective,
}

/// Screen-space projection for one output size.
#[derive(Debug, Clone)]
pub struct Projection {
    kind: ProjectionKind,
    width: u32,
    height: u32,
    /// Aggregate `viewport * projection`, built once per render.
    transform: Matrix,
}

impl Projection {
    /// # Arguments
    /// * `width`, `height` - Output image size in pixels
    /// * `depth` - Range the viewport maps z onto (z lands in [0, depth])
    /// * `camera_z` - Distance of the camera from the origin along +z
    pub fn new(kind: ProjectionKind, width: u32, height: u32, depth: f32, camera_z: f32) -> Self {
        let transform = match kind {
            ProjectionKind::Orthographic => Matrix::identity(4),
            ProjectionKind::Perspective => {
                let viewport = Self::viewport(
                    width / 8,
                    height / 8,
                    width * 3 / 4,
                    height * 3 / 4,
                    depth,
                );
                &viewport * &Self::perspective(camera_z)
            }
        };

        Self {
            kind,
            width,
            height,
            transform,
        }
    }

    /// Identity with `m[3][2] = -1/camera_z`, so `w = 1 - z/camera_z`.
    pub fn perspective(camera_z: f32) -> Matrix {
        let mut m = Matrix::identity(4);
        m[(3, 2)] = -1.0 / camera_z;
        m
    }

    /// Maps the [-1, 1] cube onto the `w` x `h` pixel rectangle at (x, y)
    /// and z onto [0, depth].
    pub fn viewport(x: u32, y: u32, w: u32, h: u32, depth: f32) -> Matrix {
        let (w, h) = (w as f32, h as f32);
        let mut m = Matrix::identity(4);
        m[(0, 3)] = x as f32 + w / 2.0;
        m[(1, 3)] = y as f32 + h / 2.0;
        m[(2, 3)] = depth / 2.0;

        m[(0, 0)] = w / 2.0;
        m[(1, 1)] = h / 2.0;
        m[(2, 2)] = depth / 2.0;
        m
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    /// The aggregate matrix applied in perspective mode.
    pub fn matrix(&self) -> &Matrix {
        &self.transform
    }

    /// Project a model-space vertex.
    ///
    /// Returns `None` when the homogeneous w is zero, i.e. the vertex lies in
    /// the camera's focal plane.
    pub fn project(&self, v: Vec3f) -> Option<Vec3f> {
        match self.kind {
            ProjectionKind::Orthographic => Some(Vec3f::new(
                (v.x() + 1.0) * self.width as f32 / 2.0,
                (v.y() + 1.0) * self.height as f32 / 2.0,
                v.z(),
            )),
            ProjectionKind::Perspective => (&self.transform * &Matrix::from_point(v)).to_point(),
        }
    }
}
