//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the frame (color image plus depth buffer) and runs the pipeline for every
//! face of a mesh:
//!
//! 1. Flat light intensity from the model-space face normal; faces facing
//!    away from the light are culled.
//! 2. Projection of the three corners to screen space.
//! 3. Rasterization with the depth test and texture (or flat) shading.

use std::path::Path;

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::colors;
use crate::config::{ConfigError, RenderConfig};
use crate::light::DirectionalLight;
use crate::math::Vec2f;
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::raster::RasterImage;
use crate::render::rasterizer::{FlatShader, TextureShader};
use crate::render::{BoundingBoxRasterizer, Renderer, Triangle};
use crate::texture::Texture;

/// What to draw for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Lit, depth-tested, textured triangles
    #[default]
    Textured,
    /// Projected edges only, no lighting or depth test
    Wireframe,
}

/// Per-render counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces visited
    pub faces: usize,
    /// Faces that reached the rasterizer (or were outlined in wireframe mode)
    pub drawn: usize,
    /// Faces with intensity <= 0
    pub culled: usize,
    /// Faces with no area, a corner that could not be projected, or (in
    /// wireframe mode) a corner projected too far off the image to outline
    pub degenerate: usize,
    /// Pixels written by the filled rasterizer
    pub pixels: usize,
}

pub struct Engine {
    config: RenderConfig,
    renderer: Renderer,
    rasterizer: BoundingBoxRasterizer,
    projection: Projection,
    light: DirectionalLight,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let projection = Projection::new(
            config.projection,
            config.width,
            config.height,
            config.depth,
            config.camera_z,
        );

        Ok(Self {
            renderer: Renderer::new(config.width, config.height, config.background()),
            rasterizer: BoundingBoxRasterizer::new(config.barycentric),
            light: DirectionalLight::new(config.light()),
            projection,
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The rendered frame, origin at the bottom-left.
    pub fn image(&self) -> &RasterImage {
        self.renderer.image()
    }

    pub fn depth_buffer(&self) -> &[f32] {
        self.renderer.depth_buffer()
    }

    /// Render every face of `mesh` into a freshly cleared frame.
    ///
    /// Without a texture, lit faces are filled with white scaled by their
    /// intensity.
    pub fn render(&mut self, mesh: &Mesh, texture: Option<&Texture>) -> RenderStats {
        self.renderer.clear(self.config.background());
        self.renderer.clear_depth();

        let mut stats = RenderStats {
            faces: mesh.face_count(),
            ..RenderStats::default()
        };

        for face in 0..mesh.face_count() {
            let world = mesh.face(face).map(|i| mesh.vertex(i));

            let intensity = match self.config.mode {
                RenderMode::Wireframe => 1.0,
                RenderMode::Textured => match DirectionalLight::face_normal(world) {
                    Some(normal) => normal.dot(self.light.direction),
                    None => {
                        trace!("face {face}: zero area in model space");
                        stats.degenerate += 1;
                        continue;
                    }
                },
            };
            if intensity <= 0.0 {
                trace!("face {face}: culled, intensity {intensity}");
                stats.culled += 1;
                continue;
            }

            let [a, b, c] = world.map(|v| self.projection.project(v));
            let (Some(a), Some(b), Some(c)) = (a, b, c) else {
                trace!("face {face}: corner in the camera plane");
                stats.degenerate += 1;
                continue;
            };

            let uvs = [0, 1, 2].map(|corner| {
                mesh.texture_index(face, corner)
                    .map_or(Vec2f::ZERO, |t| mesh.texture_coord(t))
            });
            let triangle = Triangle::new([a, b, c], uvs);

            if self.config.mode == RenderMode::Wireframe {
                if self
                    .renderer
                    .draw_triangle_wireframe(&triangle, colors::WIREFRAME)
                {
                    stats.drawn += 1;
                } else {
                    trace!("face {face}: projected too far off the image to outline");
                    stats.degenerate += 1;
                }
                continue;
            }

            let mut fb = self.renderer.as_framebuffer();
            let written = match texture {
                Some(texture) => self.rasterizer.fill_triangle(
                    &triangle,
                    &mut fb,
                    &TextureShader::new(texture, uvs, intensity),
                ),
                None => self.rasterizer.fill_triangle(
                    &triangle,
                    &mut fb,
                    &FlatShader::new(colors::WHITE.scale(intensity)),
                ),
            };

            match written {
                Some(pixels) => {
                    stats.drawn += 1;
                    stats.pixels += pixels;
                }
                None => {
                    trace!("face {face}: zero area on screen");
                    stats.degenerate += 1;
                }
            }
        }

        info!(
            "rendered {} faces ({} drawn, {} culled, {} degenerate), {} pixels via {}",
            stats.faces,
            stats.drawn,
            stats.culled,
            stats.degenerate,
            stats.pixels,
            self.rasterizer.method()
        );
        stats
    }

    /// Write the frame with the origin moved to the top-left, as image files
    /// expect.
    pub fn write_output<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut image = self.renderer.image().clone();
        image.flip_vertically();
        image.write(path.as_ref())?;
        info!("wrote {}", path.as_ref().display());
        Ok(())
    }
}
