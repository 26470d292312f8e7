/// A single acquired frame.
///
/// Short-lived; holding the surface texture blocks acquisition of subsequent
/// frames, so finalize promptly via [`Gpu::submit`](super::Gpu::submit).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
