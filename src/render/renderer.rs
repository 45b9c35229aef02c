//! Low-level rendering target.
//!
//! Provides the [`Renderer`] struct which owns the color image and the depth
//! buffer and implements the drawing operations the engine needs: clearing,
//! filled triangles through a [`FrameBuffer`] view, and wireframe edges.

use super::framebuffer::{FrameBuffer, DEPTH_CLEAR};
use super::rasterizer::Triangle;
use crate::colors::Color;
use crate::raster::RasterImage;

/// How many image extents (width + height) a wireframe corner may sit from
/// the origin before the triangle is refused.
pub const WIREFRAME_REACH: f32 = 4.0;

pub struct Renderer {
    image: RasterImage,
    depth_buffer: Vec<f32>,
}

impl Renderer {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RasterImage::new(width, height, background),
            depth_buffer: vec![DEPTH_CLEAR; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn clear(&mut self, color: Color) {
        self.image.fill(color);
    }

    /// Reset every depth to [`DEPTH_CLEAR`] so the next frame starts empty.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(DEPTH_CLEAR);
    }

    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Outline a screen-space triangle, ignoring depth.
    ///
    /// Returns `false` without drawing when a corner is not finite or lies
    /// further than [`WIREFRAME_REACH`] image extents from the image, since
    /// such edges would walk millions of off-screen pixels.
    pub fn draw_triangle_wireframe(&mut self, triangle: &Triangle, color: Color) -> bool {
        let reach = (self.width() + self.height()) as f32 * WIREFRAME_REACH;
        let drawable = triangle.points.iter().all(|p| {
            p.x().is_finite() && p.y().is_finite() && p.x().abs() <= reach && p.y().abs() <= reach
        });
        if !drawable {
            return false;
        }

        let [p0, p1, p2] = triangle.points.map(|p| p.to_i32());
        for (a, b) in [(p0, p1), (p1, p2), (p2, p0)] {
            self.image.draw_line(a.x(), a.y(), b.x(), b.y(), color);
        }
        true
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        let (width, height) = (self.image.width(), self.image.height());
        FrameBuffer::new(
            self.image.pixels_mut(),
            &mut self.depth_buffer,
            width,
            height,
        )
    }
}
