use super::vector::{Scalar, Vector};

pub type Vec2f = Vector<f32, 2>;
pub type Vec2i = Vector<i32, 2>;

impl<T: Scalar> Vector<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    pub fn x(&self) -> T {
        self[0]
    }

    pub fn y(&self) -> T {
        self[1]
    }

    /// Texture-space alias for `x`.
    pub fn u(&self) -> T {
        self[0]
    }

    /// Texture-space alias for `y`.
    pub fn v(&self) -> T {
        self[1]
    }
}

impl Vec2f {
    pub const ZERO: Self = Self::new(0.0, 0.0);
}
