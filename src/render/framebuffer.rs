//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

use crate::colors::Color;

/// Initial depth of every pixel: the most negative representable depth, so
/// the first fragment to reach a pixel always wins.
pub const DEPTH_CLEAR: f32 = f32::MIN;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Depth Buffer
///
/// Depth is the screen-space z produced by the projection stage. Larger
/// values are closer to the camera, so a fragment wins when the stored value
/// is strictly less than its own.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [Color],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [Color],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            width as usize * height as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Depth test at (x, y).
    ///
    /// If the stored depth is strictly less than `depth` the fragment wins:
    /// the depth buffer is updated and `true` is returned. Otherwise nothing
    /// changes. Out-of-bounds coordinates always fail.
    #[inline]
    pub fn test_and_set_depth(&mut self, x: i32, y: i32, depth: f32) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if self.depth_buffer[idx] < depth {
            self.depth_buffer[idx] = depth;
            true
        } else {
            false
        }
    }

    /// Set a pixel without depth testing. Silently ignores out-of-bounds
    /// coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}
