//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer handles:
//! - Bounding box computation
//! - Barycentric coordinate calculation
//! - Inside/outside testing
//! - Depth interpolation and the depth test
//!
//! The shader handles, for fragments that passed the depth test:
//! - Attribute interpolation (UVs)
//! - Texture sampling
//! - Final color computation

use crate::colors::Color;
use crate::math::{Vec2f, Vec3f};
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// The rasterizer calls `shade()` for each pixel that wins the depth test,
/// providing the barycentric coordinates for attribute interpolation.
///
/// # Barycentric Coordinates
///
/// The `lambda` parameter contains three weights [λ₀, λ₁, λ₂] that:
/// - Sum to 1.0 for any point inside the triangle
/// - Represent the "influence" of each vertex on the current pixel
/// - Can be used to interpolate any per-vertex attribute:
///   `attr_at_pixel = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`
pub trait PixelShader {
    /// Compute the color for a pixel given its barycentric coordinates.
    fn shade(&self, lambda: Vec3f) -> Color;
}

/// Flat shader - returns a constant color for all pixels.
///
/// Used when no texture is loaded: the color is already scaled by the
/// face's light intensity.
pub struct FlatShader {
    color: Color,
}

impl FlatShader {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: Vec3f) -> Color {
        self.color
    }
}

/// Modulated texture shader - texture color multiplied by the face intensity.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uvs: [Vec2f; 3],
    intensity: f32,
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: &'a Texture, uvs: [Vec2f; 3], intensity: f32) -> Self {
        Self {
            texture,
            uvs,
            intensity,
        }
    }

    /// Interpolate UV coordinates using barycentric weights
    #[inline]
    fn interpolate_uv(&self, lambda: Vec3f) -> Vec2f {
        self.uvs[0] * lambda[0] + self.uvs[1] * lambda[1] + self.uvs[2] * lambda[2]
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: Vec3f) -> Color {
        let uv = self.interpolate_uv(lambda);
        self.texture.sample(uv.u(), uv.v()).scale(self.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED, WHITE};
    use crate::raster::RasterImage;
    use approx::assert_relative_eq;

    #[test]
    fn uv_interpolation_uses_weights() {
        let tex = Texture::solid(2, 2, WHITE);
        let uvs = [Vec2f::new(0.0, 0.0), Vec2f::new(1.0, 0.0), Vec2f::new(0.0, 1.0)];
        let shader = TextureShader::new(&tex, uvs, 1.0);
        let uv = shader.interpolate_uv(Vec3f::new(0.5, 0.25, 0.25));
        assert_relative_eq!(uv.u(), 0.25);
        assert_relative_eq!(uv.v(), 0.25);
    }

    #[test]
    fn texture_color_is_modulated() {
        let mut img = RasterImage::new(2, 2, BLACK);
        img.set(1, 1, RED);
        let tex = Texture::from_image(img);
        // uv (0, 0) mirrors onto the last texel.
        let uvs = [Vec2f::ZERO; 3];
        let shader = TextureShader::new(&tex, uvs, 0.5);
        assert_eq!(shader.shade(Vec3f::new(1.0, 0.0, 0.0)), Color::rgb(127, 0, 0));
    }
}
