//! Color types shared by the clear pass and renderers.

mod color;

pub use color::Color;
