use super::vec2::Vec2f;
use super::vector::{Scalar, Vector};

pub type Vec3f = Vector<f32, 3>;
pub type Vec3i = Vector<i32, 3>;

impl<T: Scalar> Vector<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    pub fn x(&self) -> T {
        self[0]
    }

    pub fn y(&self) -> T {
        self[1]
    }

    pub fn z(&self) -> T {
        self[2]
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl Vec3f {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Euclidean length.
    pub fn norm(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Scale to unit length in place.
    ///
    /// A zero vector is left untouched rather than turned into NaNs.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        if norm > 0.0 {
            *self = self.scale(1.0 / norm);
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Drop the z component.
    pub fn xy(&self) -> Vec2f {
        Vec2f::new(self.x(), self.y())
    }
}
