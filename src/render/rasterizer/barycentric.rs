//! Barycentric coordinates of a pixel against a screen-space triangle.
//!
//! Two interchangeable formulations are provided. Both work in the screen
//! plane (x, y), return weights `[λ₀, λ₁, λ₂]` that sum to 1, and refuse to
//! set up a triangle whose area is zero relative to its edge lengths
//! (`area² <= ε·|e₀|²·|e₁|²`, i.e. the angle between two edges is within
//! about `√ε` of 0 or π). The test is scale-free, so it behaves the same
//! for a triangle near the origin and one a thousand pixels away.
//!
//! # Signed area
//!
//! Each weight is the signed area of the sub-triangle opposite a vertex,
//! divided by the whole triangle's signed area. Areas come from 2D cross
//! products:
//!
//! ```text
//! λ₀ = ((B.y - C.y)(P.x - C.x) + (C.x - B.x)(P.y - C.y)) / area
//! λ₁ = ((C.y - A.y)(P.x - C.x) + (A.x - C.x)(P.y - C.y)) / area
//! λ₂ = 1 - λ₀ - λ₁
//! ```
//!
//! # Plane solve
//!
//! Writes `P - A = λ₁(B - A) + λ₂(C - A)` and solves the 2x2 normal
//! equations built from dot products of the edge vectors:
//!
//! ```text
//! | d00 d01 | |λ₁|   | d20 |
//! | d01 d11 | |λ₂| = | d21 |        λ₀ = 1 - λ₁ - λ₂
//! ```
//!
//! Its determinant is `|B - A|²|C - A|² - ((B - A)·(C - A))²`, which is zero
//! exactly when the edges are parallel.

use serde::{Deserialize, Serialize};

use crate::math::{Vec2f, Vec3f};

/// Per-triangle setup plus per-pixel evaluation.
pub trait Barycentric: Sized {
    /// Precompute everything that does not depend on the pixel.
    ///
    /// Returns `None` for a degenerate (zero-area) triangle.
    fn setup(points: [Vec3f; 3]) -> Option<Self>;

    /// Weights of `p` against the triangle.
    fn weights(&self, p: Vec2f) -> Vec3f;
}

/// Which barycentric formulation the rasterizer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarycentricMethod {
    #[default]
    SignedArea,
    PlaneSolve,
}

impl BarycentricMethod {
    /// One-shot weights of `p`, or `None` for a degenerate triangle.
    pub fn weights(self, points: [Vec3f; 3], p: Vec2f) -> Option<Vec3f> {
        match self {
            BarycentricMethod::SignedArea => SignedArea::setup(points).map(|b| b.weights(p)),
            BarycentricMethod::PlaneSolve => PlaneSolve::setup(points).map(|b| b.weights(p)),
        }
    }
}

impl std::fmt::Display for BarycentricMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarycentricMethod::SignedArea => write!(f, "signed-area"),
            BarycentricMethod::PlaneSolve => write!(f, "plane-solve"),
        }
    }
}

/// 2D signed-area ratios.
#[derive(Clone, Copy, Debug)]
pub struct SignedArea {
    a: Vec2f,
    b: Vec2f,
    c: Vec2f,
    area: f32,
}

impl Barycentric for SignedArea {
    fn setup([a, b, c]: [Vec3f; 3]) -> Option<Self> {
        let (a, b, c) = (a.xy(), b.xy(), c.xy());
        // Twice the signed area: the λ₀ numerator evaluated at A.
        let area = (b.y() - c.y()) * (a.x() - c.x()) + (c.x() - b.x()) * (a.y() - c.y());
        let (ca, cb) = (a - c, b - c);
        if area * area <= f32::EPSILON * ca.dot(ca) * cb.dot(cb) {
            return None;
        }
        Some(Self { a, b, c, area })
    }

    #[inline]
    fn weights(&self, p: Vec2f) -> Vec3f {
        let Self { a, b, c, area } = *self;
        // Divide rather than multiply by a reciprocal so vertices come out
        // as exact unit weights.
        let alpha = ((b.y() - c.y()) * (p.x() - c.x()) + (c.x() - b.x()) * (p.y() - c.y())) / area;
        let beta = ((c.y() - a.y()) * (p.x() - c.x()) + (a.x() - c.x()) * (p.y() - c.y())) / area;
        Vec3f::new(alpha, beta, 1.0 - alpha - beta)
    }
}

/// Normal-equation solve in the triangle's screen plane.
#[derive(Clone, Copy, Debug)]
pub struct PlaneSolve {
    origin: Vec2f,
    edge0: Vec2f,
    edge1: Vec2f,
    d00: f32,
    d01: f32,
    d11: f32,
    denom: f32,
}

impl Barycentric for PlaneSolve {
    fn setup([a, b, c]: [Vec3f; 3]) -> Option<Self> {
        let origin = a.xy();
        let edge0 = b.xy() - origin;
        let edge1 = c.xy() - origin;

        let d00 = edge0.dot(edge0);
        let d01 = edge0.dot(edge1);
        let d11 = edge1.dot(edge1);
        let denom = d00 * d11 - d01 * d01;
        // Cauchy-Schwarz keeps denom >= 0; rounding leaves parallel edges
        // within a few ulps of d00 * d11.
        if denom <= f32::EPSILON * d00 * d11 {
            return None;
        }

        Some(Self {
            origin,
            edge0,
            edge1,
            d00,
            d01,
            d11,
            denom,
        })
    }

    #[inline]
    fn weights(&self, p: Vec2f) -> Vec3f {
        let offset = p - self.origin;
        let d20 = offset.dot(self.edge0);
        let d21 = offset.dot(self.edge1);
        let v = (self.d11 * d20 - self.d01 * d21) / self.denom;
        let w = (self.d00 * d21 - self.d01 * d20) / self.denom;
        Vec3f::new(1.0 - v - w, v, w)
    }
}
