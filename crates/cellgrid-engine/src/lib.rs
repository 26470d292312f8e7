//! Cellgrid engine crate.
//!
//! Owns the platform + GPU runtime pieces: device acquisition, window loop,
//! and the quad/grid renderers driven by higher layers.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod grid;
pub mod paint;
pub mod render;
