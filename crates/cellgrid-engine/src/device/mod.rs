//! GPU device + surface management.
//!
//! Responsibilities:
//! - create the wgpu Instance/Adapter/Device/Queue
//! - create & configure the Surface bound to a window
//! - acquire frames and provide encoders/views for rendering
//!
//! Acquisition failures (no adapter, no supported surface format) are fatal
//! and surface before any buffer or pipeline exists.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
