//! A CPU software rasterizer for textured, lit triangle meshes.
//!
//! A Wavefront OBJ mesh is projected to screen space, lit with a single
//! directional light, and filled triangle by triangle with a depth buffer
//! and nearest-texel texture sampling. The result is a single image file.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastrum::prelude::*;
//!
//! let mesh = Mesh::from_obj("obj/african_head.obj", Strictness::Strict)?;
//! let texture = Texture::from_file("obj/african_head_diffuse.tga")?;
//! let mut engine = Engine::new(RenderConfig::default())?;
//! engine.render(&mesh, Some(&texture));
//! engine.write_output("output.tga")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod math;
pub mod mesh;
pub mod obj;
pub mod projection;
pub mod raster;
pub mod texture;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::{AssetConfig, Config, ConfigError, RenderConfig};
pub use engine::{Engine, RenderMode, RenderStats};
pub use mesh::{LoadError, Mesh, Strictness};
pub use projection::{Projection, ProjectionKind};
pub use render::BarycentricMethod;
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastrum::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::{AssetConfig, Config, RenderConfig};

    // Engine
    pub use crate::engine::{Engine, RenderMode, RenderStats};

    // Assets
    pub use crate::mesh::{Mesh, Strictness};
    pub use crate::raster::RasterImage;
    pub use crate::texture::Texture;

    // Scene
    pub use crate::colors::Color;
    pub use crate::light::DirectionalLight;
    pub use crate::projection::{Projection, ProjectionKind};

    // Math
    pub use crate::math::{Matrix, Vec2f, Vec2i, Vec3f, Vec3i};

    // Rendering
    pub use crate::render::BarycentricMethod;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::rasterizer::{FlatShader, TextureShader};
    pub use crate::render::{
        BarycentricMethod, BoundingBoxRasterizer, FrameBuffer, Triangle, DEPTH_CLEAR,
    };
}
