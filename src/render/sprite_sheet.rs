use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::render::sprite::Sprite;
use crate::traits::render::{RenderBackend, TextureId};
use crate::util::error::OverlayError;

/// Where one sprite's texture comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub sprite: Sprite,
    pub path: PathBuf,
}

impl AssetRecord {
    /// The fixed asset table rooted at `asset_dir`, in load order.
    pub fn table(asset_dir: &Path) -> Vec<AssetRecord> {
        Sprite::ALL
            .iter()
            .map(|&sprite| AssetRecord {
                sprite,
                path: asset_dir.join(sprite.file_name()),
            })
            .collect()
    }
}

/// All overlay textures, one per [`Sprite`].
#[derive(Debug)]
pub struct SpriteSheet {
    textures: [TextureId; Sprite::COUNT],
}

impl SpriteSheet {
    /// Load every sprite from `asset_dir`.
    ///
    /// All or nothing: on the first failure every texture loaded so far is
    /// released before the error is returned.
    pub fn load<B: RenderBackend>(backend: &mut B, asset_dir: &Path) -> Result<Self, OverlayError> {
        let records = AssetRecord::table(asset_dir);
        let mut textures = [TextureId(0); Sprite::COUNT];

        for (slot, record) in records.iter().enumerate() {
            match load_slot(backend, record) {
                Ok(id) => textures[slot] = id,
                Err(e) => {
                    for &id in &textures[..slot] {
                        backend.release_texture(id);
                    }
                    return Err(e);
                }
            }
        }

        info!(count = Sprite::COUNT, dir = %asset_dir.display(), "sprites loaded");
        Ok(Self { textures })
    }

    pub fn texture(&self, sprite: Sprite) -> TextureId {
        self.textures[sprite.index()]
    }

    /// Release every texture back to the backend.
    pub fn release<B: RenderBackend>(self, backend: &mut B) {
        for id in self.textures {
            backend.release_texture(id);
        }
        debug!("sprites released");
    }
}

/// Load a single record.
fn load_slot<B: RenderBackend>(backend: &mut B, record: &AssetRecord) -> Result<TextureId, OverlayError> {
    if record.path.as_os_str().is_empty() {
        error!(sprite = ?record.sprite, "asset record has no path");
        return Err(OverlayError::InvalidAssetRecord(record.sprite));
    }

    backend.load_texture(&record.path).map_err(|e| {
        error!(path = %record.path.display(), "required image could not be loaded: {e:#}");
        OverlayError::AssetLoad {
            path: record.path.clone(),
            reason: format!("{e:#}"),
        }
    })
}
