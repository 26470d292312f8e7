/// Linear RGBA color.
///
/// Components are in `[0, 1]`. Nothing in this engine blends, so no
/// premultiplication contract is imposed; the value is handed to the GPU
/// as-is (clear color, solid fills).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (`a = 1`).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
}
