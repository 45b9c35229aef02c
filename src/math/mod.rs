//! Linear-algebra primitives: fixed-size vectors and a dynamic matrix.

pub mod matrix;
pub mod vec2;
pub mod vec3;
pub mod vector;

pub use matrix::{Matrix, MatrixError};
pub use vec2::{Vec2f, Vec2i};
pub use vec3::{Vec3f, Vec3i};
pub use vector::{Scalar, Vector};
