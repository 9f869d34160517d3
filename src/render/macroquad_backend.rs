use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use macroquad::prelude::{
    DrawTextureParams, FilterMode, Texture2D, WHITE, clear_background, draw_texture_ex, vec2,
};

use crate::traits::render::{Color, DstRect, RenderBackend, TextureId};

/// RenderBackend drawing into the macroquad window.
///
/// Presentation is not part of the frame: the app loop awaits
/// `next_frame()` after `end_frame`, which is where vsync blocks.
pub struct MacroquadBackend {
    textures: HashMap<TextureId, Texture2D>,
    next_id: u64,
}

impl MacroquadBackend {
    /// Must be called from inside the macroquad main future.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for MacroquadBackend {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }

    /// Decode with the image crate and upload as RGBA8.
    fn load_texture(&mut self, path: &Path) -> Result<TextureId> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;
        let rgba = img.to_rgba8();

        let width = u16::try_from(rgba.width())
            .map_err(|_| anyhow!("image too wide: {}", path.display()))?;
        let height = u16::try_from(rgba.height())
            .map_err(|_| anyhow!("image too tall: {}", path.display()))?;

        let texture = Texture2D::from_rgba8(width, height, rgba.as_raw());
        texture.set_filter(FilterMode::Linear);

        let id = self.alloc_id();
        self.textures.insert(id, texture);
        Ok(id)
    }

    fn release_texture(&mut self, id: TextureId) {
        // Dropping the last handle frees the GPU texture.
        self.textures.remove(&id);
    }

    fn draw_sprite(&mut self, texture: TextureId, dst: DstRect) -> Result<()> {
        let tex = self
            .textures
            .get(&texture)
            .ok_or_else(|| anyhow!("unknown texture: {:?}", texture))?;

        draw_texture_ex(
            tex,
            dst.x,
            dst.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dst.w, dst.h)),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        clear_background(macroquad::color::Color::new(
            color.r, color.g, color.b, color.a,
        ));
        Ok(())
    }
}
