use std::path::Path;

use crate::colors::Color;
use crate::raster::RasterImage;

/// A read-only raster image sampled by texture coordinates.
#[derive(Clone, Debug)]
pub struct Texture {
    image: RasterImage,
}

impl Texture {
    /// Load a texture from an image file (TGA, PNG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        Ok(Self {
            image: RasterImage::read(path)?,
        })
    }

    pub fn from_image(image: RasterImage) -> Self {
        Self { image }
    }

    /// A texture of a single colour.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self::from_image(RasterImage::new(width, height, color))
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// # UV Coordinate Convention
    /// The texel is read at `(width - ⌊u·width⌋, height - ⌊v·height⌋)`: both
    /// axes are mirrored because the image rows and columns are stored in
    /// the opposite order to the mesh's UV space. The result is clamped into
    /// the image, so `u = 0` reads the last column rather than one past it.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let width = self.image.width() as i32;
        let height = self.image.height() as i32;
        if width == 0 || height == 0 {
            return Color::default();
        }

        let x = (width - (u * width as f32) as i32).clamp(0, width - 1);
        let y = (height - (v * height as f32) as i32).clamp(0, height - 1);

        self.image.get(x, y).unwrap_or_default()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RasterImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED, WHITE};

    fn marked() -> Texture {
        let mut img = RasterImage::new(4, 4, BLACK);
        img.set(3, 3, RED);
        img.set(0, 0, WHITE);
        Texture::from_image(img)
    }

    #[test]
    fn sample_mirrors_both_axes() {
        let tex = marked();
        // u = v = 0.25 -> texel (4 - 1, 4 - 1)
        assert_eq!(tex.sample(0.25, 0.25), RED);
        // u = v = 1.0 -> texel (0, 0)
        assert_eq!(tex.sample(1.0, 1.0), WHITE);
    }

    #[test]
    fn sample_clamps_at_origin_uv() {
        // u = v = 0 lands one past the last texel and is clamped onto it.
        assert_eq!(marked().sample(0.0, 0.0), RED);
    }

    #[test]
    fn solid_texture_is_uniform() {
        let tex = Texture::solid(8, 8, WHITE);
        for (u, v) in [(0.0, 0.0), (0.3, 0.9), (1.0, 0.5)] {
            assert_eq!(tex.sample(u, v), WHITE);
        }
    }
}
