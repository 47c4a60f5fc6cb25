//! WebGPU rendering module
//!
//! The scene is tessellated into pixel-space triangles on the CPU and drawn
//! with a single vertex-color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shapes::scene;
pub use vertex::Vertex;
