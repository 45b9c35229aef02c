//! Truecolor raster image container.
//!
//! Pixels are stored row by row in a flat `Vec<Color>`. The renderer treats
//! (0, 0) as the bottom-left corner; image files put it top-left, so the
//! output is flipped with [`RasterImage::flip_vertically`] before writing.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::colors::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl RasterImage {
    /// Create a `width` x `height` image filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            pixels: vec![fill; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Load any format the `image` crate recognises (TGA, PNG, ...).
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Color::from(p.0)).collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Write the image; the format follows the file extension.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_fn(self.width, self.height, |x, y| {
                Rgba(self.pixels[self.index(x, y)].to_array())
            });
        buffer.save(path)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.in_bounds(x, y)
            .then(|| self.pixels[self.index(x as u32, y as u32)])
    }

    /// Set the color at (x, y). Returns false for out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        self.pixels[idx] = color;
        true
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Swap rows top-to-bottom in place.
    pub fn flip_vertically(&mut self) {
        let row = self.width as usize;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((height - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }

    /// Draws a line using Bresenham's algorithm.
    ///
    /// For each step along the major axis the accumulated error decides
    /// whether to also step along the minor axis. Out-of-bounds pixels are
    /// skipped. The error term is kept in `i64` so endpoints anywhere in the
    /// `i32` range cannot overflow it; callers bound the line length.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let x_step = if x0 < x1 { 1 } else { -1 };
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            // x and y stay between the i32 endpoints.
            self.set(x as i32, y as i32, color);
            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED, WHITE};

    #[test]
    fn get_and_set_respect_bounds() {
        let mut img = RasterImage::new(4, 3, BLACK);
        assert!(img.set(3, 2, RED));
        assert!(!img.set(4, 0, RED));
        assert!(!img.set(-1, 0, RED));
        assert_eq!(img.get(3, 2), Some(RED));
        assert_eq!(img.get(0, 3), None);
    }

    #[test]
    fn flip_swaps_rows() {
        let mut img = RasterImage::new(2, 3, BLACK);
        img.set(0, 0, RED);
        img.set(1, 1, WHITE);
        img.flip_vertically();
        assert_eq!(img.get(0, 2), Some(RED));
        assert_eq!(img.get(0, 0), Some(BLACK));
        // The middle row of an odd-height image stays put.
        assert_eq!(img.get(1, 1), Some(WHITE));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut img = RasterImage::new(10, 10, BLACK);
        img.draw_line(1, 1, 8, 5, WHITE);
        assert_eq!(img.get(1, 1), Some(WHITE));
        assert_eq!(img.get(8, 5), Some(WHITE));
        let lit = img.pixels().iter().filter(|&&c| c == WHITE).count();
        // One pixel per step along the major axis.
        assert_eq!(lit, 8);
    }

    #[test]
    fn line_between_extreme_endpoints_does_not_overflow() {
        let mut img = RasterImage::new(4, 4, BLACK);
        // Short segment whose coordinates sit at the top of the i32 range.
        img.draw_line(i32::MAX - 3, i32::MAX, i32::MAX, i32::MAX - 2, WHITE);
        img.draw_line(i32::MIN, i32::MIN, i32::MIN + 2, i32::MIN + 1, WHITE);
        assert!(img.pixels().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn write_then_read_tga() {
        let path = std::env::temp_dir().join(format!("rastrum-raster-{}.tga", std::process::id()));
        let mut img = RasterImage::new(3, 2, BLACK);
        img.set(2, 1, RED);
        img.write(&path).unwrap();

        let loaded = RasterImage::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, img);
    }
}
