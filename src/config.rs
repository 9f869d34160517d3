use std::path::PathBuf;

use crate::traits::render::{Color, DstRect};

/// Fixed window and asset settings for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Directory holding the sprite PNGs, relative to the working directory.
    pub asset_dir: PathBuf,
    pub background: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "BongoCat".to_string(),
            width: 500,
            height: 500,
            asset_dir: PathBuf::from("assets"),
            background: Color::rgb8(0x00, 0xB1, 0x40),
        }
    }
}

impl OverlayConfig {
    /// Default settings with sprites read from `asset_dir`.
    pub fn with_asset_dir(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            ..Self::default()
        }
    }

    /// Every sprite is drawn over the whole window.
    pub fn target(&self) -> DstRect {
        DstRect::full(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::default();
        assert_eq!(config.title, "BongoCat");
        assert_eq!((config.width, config.height), (500, 500));
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert_eq!(config.background.r, 0.0);
        assert_eq!(config.background.a, 1.0);
    }

    #[test]
    fn test_target_covers_window() {
        let target = OverlayConfig::default().target();
        assert_eq!(target, DstRect::full(500, 500));
        assert_eq!(target.w, 500.0);
    }
}
