//! Fixed-length numeric vectors backed by a plain array.
//!
//! [`Vector<T, N>`] stores its components in a `[T; N]`. Named accessors
//! (`x()`, `y()`, `z()`, `u()`, `v()`) are provided per arity in the `vec2`
//! and `vec3` modules and are computed from the array, so there is exactly
//! one storage layout.

use std::array;
use std::fmt::Debug;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// Element types a [`Vector`] can hold.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}
impl Scalar for i32 {}
impl Scalar for i64 {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const N: usize> {
    raw: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub const fn from_array(raw: [T; N]) -> Self {
        Self { raw }
    }

    /// A vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self { raw: [value; N] }
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.raw
    }

    pub fn to_array(self) -> [T; N] {
        self.raw
    }

    pub fn dot(&self, other: Self) -> T {
        self.raw
            .iter()
            .zip(other.raw.iter())
            .fold(T::default(), |acc, (&a, &b)| acc + a * b)
    }

    /// Apply `f` to every component.
    pub fn map<U: Scalar>(self, f: impl Fn(T) -> U) -> Vector<U, N> {
        Vector::from_array(self.raw.map(f))
    }

    pub fn scale(&self, scalar: T) -> Self {
        Self {
            raw: array::from_fn(|i| self.raw[i] * scalar),
        }
    }
}

impl<const N: usize> Vector<f32, N> {
    /// Truncate every component toward zero.
    pub fn to_i32(self) -> Vector<i32, N> {
        self.map(|c| c as i32)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(raw: [T; N]) -> Self {
        Self::from_array(raw)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.raw
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.raw[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.raw[index]
    }
}

/// Component-wise addition of two vectors.
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            raw: array::from_fn(|i| self.raw[i] + rhs.raw[i]),
        }
    }
}

/// Component-wise subtraction of two vectors.
impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            raw: array::from_fn(|i| self.raw[i] - rhs.raw[i]),
        }
    }
}

/// Scalar multiplication of a vector.
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            raw: self.raw.map(|c| -c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_ops() {
        let a = Vector::from_array([1.0f32, 2.0, 3.0, 4.0]);
        let b = Vector::from_array([4.0f32, 3.0, 2.0, 1.0]);
        assert_eq!((a + b).to_array(), [5.0; 4]);
        assert_eq!((a - b).to_array(), [-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0, 8.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn dot_works_for_integers() {
        let a = Vector::from_array([1, 2, 3]);
        let b = Vector::from_array([4, -5, 6]);
        assert_eq!(a.dot(b), 12);
    }

    #[test]
    fn index_is_the_raw_view() {
        let mut v = Vector::from_array([0.0f32; 3]);
        v[1] = 7.0;
        assert_eq!(v.as_array(), &[0.0, 7.0, 0.0]);
    }

    #[test]
    fn truncation_goes_toward_zero() {
        let v = Vector::from_array([1.9f32, -1.9]);
        assert_eq!(v.to_i32().to_array(), [1, -1]);
    }
}
