//! Render and asset configuration, loaded from TOML.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! [render]
//! width = 1024
//! projection = "orthographic"
//!
//! [assets]
//! model = "obj/diablo3_pose.obj"
//! texture = "obj/diablo3_pose_diffuse.tga"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::engine::RenderMode;
use crate::math::Vec3f;
use crate::mesh::Strictness;
use crate::projection::ProjectionKind;
use crate::render::BarycentricMethod;

/// Largest frame accepted, in pixels (8192 x 8192).
pub const MAX_PIXELS: u32 = 1 << 26;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub assets: AssetConfig,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.render.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Everything the render entry point needs besides the mesh and texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image size in pixels
    pub width: u32,
    pub height: u32,
    /// Range the perspective viewport maps z onto
    pub depth: f32,
    /// Direction the light travels, normalised before use
    pub light_direction: [f32; 3],
    /// Camera distance along +z (perspective only)
    pub camera_z: f32,
    pub projection: ProjectionKind,
    pub barycentric: BarycentricMethod,
    pub mode: RenderMode,
    /// RGBA clear color
    pub background: [u8; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            depth: 255.0,
            light_direction: [0.0, 0.0, -1.0],
            camera_z: 3.0,
            projection: ProjectionKind::default(),
            barycentric: BarycentricMethod::default(),
            mode: RenderMode::default(),
            background: [0, 0, 0, 255],
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        match self.width.checked_mul(self.height) {
            Some(pixels) if pixels <= MAX_PIXELS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "image size {}x{} exceeds {MAX_PIXELS} pixels",
                    self.width, self.height
                )))
            }
        }
        if self.depth.is_nan() || self.depth <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "depth must be positive, got {}",
                self.depth
            )));
        }
        if self.projection == ProjectionKind::Perspective && self.camera_z == 0.0 {
            return Err(ConfigError::Invalid(
                "camera_z must be non-zero for perspective projection".to_string(),
            ));
        }
        if self.light().norm() <= f32::EPSILON {
            return Err(ConfigError::Invalid(
                "light_direction must not be the zero vector".to_string(),
            ));
        }
        Ok(())
    }

    pub fn light(&self) -> Vec3f {
        Vec3f::from(self.light_direction)
    }

    pub fn background(&self) -> Color {
        Color::from(self.background)
    }
}

/// Input and output files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub model: PathBuf,
    /// Diffuse texture; faces are filled with flat white without one. An
    /// `[assets]` table that omits it means no texture.
    #[serde(default)]
    pub texture: Option<PathBuf>,
    pub output: PathBuf,
    pub strictness: Strictness,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from("obj/african_head.obj"),
            texture: Some(PathBuf::from("obj/african_head_diffuse.tga")),
            output: PathBuf::from("output.tga"),
            strictness: Strictness::default(),
        }
    }
}
