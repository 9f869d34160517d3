use std::path::PathBuf;

use thiserror::Error;

use crate::render::Sprite;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Failed to load asset {path}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    #[error("Asset record for {0:?} has no path")]
    InvalidAssetRecord(Sprite),

    #[error("Failed to install input hooks: {0}")]
    HookInstall(String),

    #[error("Input observer thread panicked")]
    ObserverPanicked,

    #[error("Render error: {0}")]
    Render(String),
}

impl OverlayError {
    /// Message shown to the user in the fatal error dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::AssetLoad { path, .. } => UserError::asset_missing(path),
            Self::InvalidAssetRecord(_) => UserError::asset_missing_generic().to_string(),
            Self::HookInstall(reason) => UserError::hook_install(reason),
            Self::ObserverPanicked => UserError::observer_crashed().to_string(),
            Self::Render(reason) => UserError::render_failed(reason),
        }
    }
}

/// User-friendly error messages for the fatal error dialog.
pub struct UserError;

impl UserError {
    pub const DIALOG_TITLE: &'static str = "BongoCat has crashed.";

    /// A required texture could not be loaded from `path`.
    pub fn asset_missing(path: &std::path::Path) -> String {
        format!(
            "A required texture could not be loaded.\n{}",
            path.display()
        )
    }

    pub fn asset_missing_generic() -> &'static str {
        "A required texture could not be loaded."
    }

    pub fn hook_install(reason: &str) -> String {
        format!("Keyboard and mouse hooks could not be installed.\n{reason}")
    }

    pub fn observer_crashed() -> &'static str {
        "The input listener stopped unexpectedly."
    }

    pub fn render_failed(reason: &str) -> String {
        format!("Drawing the overlay failed.\n{reason}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_asset_load_message_names_path() {
        let err = OverlayError::AssetLoad {
            path: PathBuf::from("assets/idle.png"),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("assets/idle.png"));
        assert!(err.user_message().contains("could not be loaded"));
        assert!(err.user_message().contains("idle.png"));
    }

    #[test]
    fn test_hook_install_message() {
        let msg = UserError::hook_install("access denied");
        assert!(msg.contains("hooks could not be installed"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_asset_missing() {
        let msg = UserError::asset_missing(Path::new("/tmp/begin.png"));
        assert!(msg.starts_with("A required texture could not be loaded."));
    }
}
