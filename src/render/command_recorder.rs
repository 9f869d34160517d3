use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::traits::render::{Color, DstRect, RenderBackend, TextureId};

/// Recorded draw command for testing.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginFrame,
    EndFrame,
    Clear(Color),
    DrawSprite { texture: TextureId, dst: DstRect },
}

/// Mock texture data for the command recorder.
struct MockTexture {
    width: u32,
    height: u32,
}

/// A mock RenderBackend that records draw commands for snapshot testing.
///
/// Does not require a GPU. `load_texture` really decodes the file, so a
/// missing or corrupt asset fails exactly as it would in production.
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    textures: HashMap<TextureId, MockTexture>,
    released: Vec<TextureId>,
    next_texture_id: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            textures: HashMap::new(),
            released: Vec::new(),
            next_texture_id: 1,
        }
    }

    /// Get all recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear recorded commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Textures drawn so far, in order.
    pub fn drawn_textures(&self) -> Vec<TextureId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawSprite { texture, .. } => Some(*texture),
                _ => None,
            })
            .collect()
    }

    /// Register a mock texture with specified dimensions.
    pub fn register_texture(&mut self, width: u32, height: u32) -> TextureId {
        let id = TextureId(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures.insert(id, MockTexture { width, height });
        id
    }

    /// Number of textures loaded and not yet released.
    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Textures released so far, in release order.
    pub fn released(&self) -> &[TextureId] {
        &self.released
    }

    pub fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&id).map(|t| (t.width, t.height))
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for CommandRecorder {
    fn begin_frame(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::BeginFrame);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::EndFrame);
        Ok(())
    }

    fn load_texture(&mut self, path: &Path) -> Result<TextureId> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;
        Ok(self.register_texture(img.width(), img.height()))
    }

    fn release_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_some() {
            self.released.push(id);
        }
    }

    fn draw_sprite(&mut self, texture: TextureId, dst: DstRect) -> Result<()> {
        if !self.textures.contains_key(&texture) {
            return Err(anyhow!("unknown texture: {:?}", texture));
        }
        self.commands.push(DrawCommand::DrawSprite { texture, dst });
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Clear(color));
        Ok(())
    }
}
