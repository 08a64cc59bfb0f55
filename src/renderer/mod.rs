//! WebGPU rendering module
//!
//! Every sprite and glyph is a textured quad, pre-transformed on the CPU and
//! drawn through a fixed orthographic camera.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod texture;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::DrawBatch;
pub use vertex::TexturedVertex;
