use std::path::Path;

use anyhow::Result;

/// Texture handle for referencing loaded textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Color with RGBA components (0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Destination rectangle on screen (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DstRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl DstRect {
    /// Rectangle covering a `width` x `height` surface from the origin.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: width as f32,
            h: height as f32,
        }
    }
}

/// Abstraction over rendering backends.
/// Implementations: MacroquadBackend (production), CommandRecorder (testing).
pub trait RenderBackend {
    fn begin_frame(&mut self) -> Result<()>;
    fn end_frame(&mut self) -> Result<()>;

    fn load_texture(&mut self, path: &Path) -> Result<TextureId>;
    /// Free the texture. Unknown ids are ignored.
    fn release_texture(&mut self, id: TextureId);

    /// Draw the whole texture stretched over `dst`.
    fn draw_sprite(&mut self, texture: TextureId, dst: DstRect) -> Result<()>;

    fn clear(&mut self, color: Color) -> Result<()>;
}
