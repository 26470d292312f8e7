//! Grid placement math.
//!
//! CPU-side mirror of the vertex-stage transform used by the grid renderer.
//! Kept free of GPU types so placement behavior is testable on its own.

mod dims;
mod placement;

pub use dims::GridDims;
pub use placement::{cell_of_instance, cell_offset, grid_position};
