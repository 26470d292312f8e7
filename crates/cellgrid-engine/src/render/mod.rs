//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers, bind groups) and
//! issue draw commands into a frame already cleared by the runtime.
//!
//! Convention:
//! - geometry lives directly in clip space; the base quad spans [-0.8, 0.8]²
//! - the grid renderer places instances via a grid-dimensions uniform read
//!   in the vertex stage

mod common;
mod ctx;

pub mod grid;
pub mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use grid::GridRenderer;
pub use quad::QuadRenderer;
