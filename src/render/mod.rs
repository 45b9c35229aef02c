//! Screen-space rendering: buffers, rasterization and wireframe drawing.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::{FrameBuffer, DEPTH_CLEAR};
pub use rasterizer::{BarycentricMethod, BoundingBoxRasterizer, Triangle};
pub use renderer::Renderer;
