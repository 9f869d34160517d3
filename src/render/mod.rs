pub mod command_recorder;
mod frame;
mod macroquad_backend;
mod select;
mod sprite;
mod sprite_sheet;

pub use command_recorder::{CommandRecorder, DrawCommand};
pub use frame::FrameRenderer;
pub use macroquad_backend::MacroquadBackend;
pub use select::{FramePlan, FrameSample, KeyboardAnimator, base_sprite, plan_frame};
pub use sprite::{KEYBOARD_VARIATIONS, Sprite};
pub use sprite_sheet::{AssetRecord, SpriteSheet};
