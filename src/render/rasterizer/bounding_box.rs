//! Bounding-box triangle rasterization with a depth test.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's screen-space bounding box from the integer
//!    truncated vertex coordinates, clipped to the frame buffer.
//! 2. For each integer pixel position in the box, compute barycentric
//!    coordinates.
//! 3. Reject the pixel if any weight is negative. A weight of exactly zero
//!    (pixel on an edge) is accepted, so neighbouring triangles may both
//!    claim a shared edge; the later one wins the tie only if its depth is
//!    strictly greater.
//! 4. Interpolate depth and run the depth test (greater depth wins).
//! 5. Shade the winning fragment and write it.

use super::barycentric::{Barycentric, BarycentricMethod, PlaneSolve, SignedArea};
use super::shader::PixelShader;
use super::Triangle;
use crate::math::{Vec2f, Vec3f};
use crate::render::framebuffer::FrameBuffer;

/// Triangle rasterizer that walks the bounding box.
///
/// The barycentric formulation is chosen at construction; both produce the
/// same coverage up to floating-point rounding on edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxRasterizer {
    method: BarycentricMethod,
}

impl BoundingBoxRasterizer {
    pub fn new(method: BarycentricMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> BarycentricMethod {
        self.method
    }

    /// Fill a triangle into the frame buffer.
    ///
    /// Returns the number of pixels written, or `None` if the triangle is
    /// degenerate (zero screen area) and nothing was touched.
    pub fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &Triangle,
        buffer: &mut FrameBuffer,
        shader: &S,
    ) -> Option<usize> {
        match self.method {
            BarycentricMethod::SignedArea => {
                Self::rasterize_with::<SignedArea, S>(triangle.points, buffer, shader)
            }
            BarycentricMethod::PlaneSolve => {
                Self::rasterize_with::<PlaneSolve, S>(triangle.points, buffer, shader)
            }
        }
    }

    fn rasterize_with<B: Barycentric, S: PixelShader>(
        points: [Vec3f; 3],
        buffer: &mut FrameBuffer,
        shader: &S,
    ) -> Option<usize> {
        let bary = B::setup(points)?;

        // ─────────────────────────────────────────────────────────────────────
        // Step 1: Bounding box, clipped to the frame buffer
        // ─────────────────────────────────────────────────────────────────────
        let [v0, v1, v2] = points.map(|p| p.to_i32());
        let min_x = v0.x().min(v1.x()).min(v2.x()).max(0);
        let max_x = v0.x().max(v1.x()).max(v2.x()).min(buffer.width() as i32 - 1);
        let min_y = v0.y().min(v1.y()).min(v2.y()).max(0);
        let max_y = v0.y().max(v1.y()).max(v2.y()).min(buffer.height() as i32 - 1);

        let depths = Vec3f::new(points[0].z(), points[1].z(), points[2].z());
        let mut written = 0;

        // ─────────────────────────────────────────────────────────────────────
        // Step 2: Visit every pixel in the box
        // ─────────────────────────────────────────────────────────────────────
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let lambda = bary.weights(Vec2f::new(x as f32, y as f32));
                if lambda.x() < 0.0 || lambda.y() < 0.0 || lambda.z() < 0.0 {
                    continue;
                }

                let depth = lambda.dot(depths);
                if !buffer.test_and_set_depth(x, y, depth) {
                    continue;
                }

                buffer.set_pixel(x, y, shader.shade(lambda));
                written += 1;
            }
        }

        Some(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{Color, BLACK, RED, WHITE};
    use crate::render::framebuffer::DEPTH_CLEAR;
    use crate::render::rasterizer::shader::FlatShader;

    const W: u32 = 32;
    const H: u32 = 32;

    const METHODS: [BarycentricMethod; 2] =
        [BarycentricMethod::SignedArea, BarycentricMethod::PlaneSolve];

    fn triangle(points: [(f32, f32, f32); 3]) -> Triangle {
        Triangle::new(
            points.map(|(x, y, z)| Vec3f::new(x, y, z)),
            [Vec2f::ZERO; 3],
        )
    }

    struct Target {
        color: Vec<Color>,
        depth: Vec<f32>,
    }

    impl Target {
        fn new() -> Self {
            Self {
                color: vec![BLACK; (W * H) as usize],
                depth: vec![DEPTH_CLEAR; (W * H) as usize],
            }
        }

        fn fill(&mut self, method: BarycentricMethod, tri: &Triangle, color: Color) -> Option<usize> {
            let mut fb = FrameBuffer::new(&mut self.color, &mut self.depth, W, H);
            BoundingBoxRasterizer::new(method).fill_triangle(tri, &mut fb, &FlatShader::new(color))
        }

        fn at(&self, x: u32, y: u32) -> (Color, f32) {
            let i = (y * W + x) as usize;
            (self.color[i], self.depth[i])
        }
    }

    #[test]
    fn fills_interior_and_vertices() {
        for method in METHODS {
            let mut t = Target::new();
            let tri = triangle([(2.0, 2.0, 1.0), (20.0, 2.0, 1.0), (2.0, 20.0, 1.0)]);
            let written = t.fill(method, &tri, WHITE).unwrap();

            // 190 lattice points; rounding may drop some on the hypotenuse.
            assert!((171..=190).contains(&written), "wrote {written}");
            assert_eq!(t.at(2, 2), (WHITE, 1.0));
            assert_eq!(t.at(20, 2).0, WHITE);
            assert_eq!(t.at(2, 20).0, WHITE);
            assert_eq!(t.at(5, 5).0, WHITE);
            assert_eq!(t.at(15, 15), (BLACK, DEPTH_CLEAR));
            assert_eq!(t.at(1, 1), (BLACK, DEPTH_CLEAR));
        }
    }

    #[test]
    fn depth_is_interpolated() {
        let mut t = Target::new();
        let tri = triangle([(0.0, 0.0, 0.0), (30.0, 0.0, 30.0), (0.0, 30.0, 0.0)]);
        t.fill(BarycentricMethod::SignedArea, &tri, WHITE).unwrap();
        // z grows with x across this triangle.
        assert!((t.at(10, 5).1 - 10.0).abs() < 1e-3);
        assert!((t.at(20, 2).1 - 20.0).abs() < 1e-3);
    }

    #[test]
    fn nearer_triangle_wins_in_either_order() {
        let far = triangle([(0.0, 0.0, 10.0), (24.0, 0.0, 10.0), (0.0, 24.0, 10.0)]);
        let near = triangle([(4.0, 4.0, 50.0), (28.0, 4.0, 50.0), (4.0, 28.0, 50.0)]);

        for method in METHODS {
            let mut first = Target::new();
            first.fill(method, &far, WHITE);
            first.fill(method, &near, RED);

            let mut second = Target::new();
            second.fill(method, &near, RED);
            let written = second.fill(method, &far, WHITE).unwrap();

            for t in [&first, &second] {
                let (color, depth) = t.at(8, 8);
                assert_eq!(color, RED);
                assert!((depth - 50.0).abs() < 1e-3);
            }
            // Far-only region still shows the far triangle.
            let (color, depth) = second.at(1, 1);
            assert_eq!(color, WHITE);
            assert!((depth - 10.0).abs() < 1e-3);
            assert!(written > 0);
        }
    }

    #[test]
    fn degenerate_triangle_writes_nothing() {
        for method in METHODS {
            let mut t = Target::new();
            let colinear = triangle([(1.0, 1.0, 0.0), (10.0, 10.0, 0.0), (20.0, 20.0, 0.0)]);
            let point = triangle([(5.0, 5.0, 0.0); 3]);
            assert_eq!(t.fill(method, &colinear, WHITE), None);
            assert_eq!(t.fill(method, &point, WHITE), None);
            assert!(t.depth.iter().all(|&d| d == DEPTH_CLEAR));
            assert!(t.color.iter().all(|&c| c == BLACK));
        }
    }

    #[test]
    fn partially_offscreen_triangle_is_clipped() {
        for method in METHODS {
            let mut t = Target::new();
            let tri = triangle([(-40.0, -40.0, 0.0), (100.0, -40.0, 0.0), (-40.0, 100.0, 0.0)]);
            let written = t.fill(method, &tri, WHITE).unwrap();
            assert!(written > 0);
            assert!(written <= (W * H) as usize);
            assert_eq!(t.at(0, 0).0, WHITE);
        }
    }

    #[test]
    fn fully_offscreen_triangle_writes_nothing() {
        let mut t = Target::new();
        let tri = triangle([(100.0, 100.0, 0.0), (140.0, 100.0, 0.0), (100.0, 140.0, 0.0)]);
        assert_eq!(t.fill(BarycentricMethod::SignedArea, &tri, WHITE), Some(0));
    }
}
