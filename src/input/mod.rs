//! Input observation: shared state, the observer thread and platform hooks.
//!
//! This module provides:
//! - [`SharedInputState`]: key map and pointer orientation shared with the render loop
//! - [`InputObserver`]: the listener that maps raw events onto that state
//! - [`HookThread`]: owner of the observer thread and its message pump
//! - [`Orientation`]: discrete pointer direction

pub mod hook;
mod key_state;
mod observer;
mod orientation;
pub mod platform;
mod shared;
mod window_source;

pub use hook::{HookThread, MessagePump, QuitSignal};
pub use key_state::KeyMap;
pub use observer::InputObserver;
pub use orientation::{MOTION_THRESHOLD, Orientation};
pub use shared::SharedInputState;
pub use window_source::WindowInputForwarder;
