//! Platform-specific message pumps and live button queries.
//!
//! - On Windows: low-level keyboard/mouse hooks (`WH_KEYBOARD_LL`, `WH_MOUSE_LL`)
//!   and `GetAsyncKeyState` for buttons
//! - Elsewhere: no process-wide hooks; the pump idles until quit and the render
//!   loop forwards window input instead

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use self::win32::{LiveButtons, LowLevelHookPump as PlatformPump};

#[cfg(not(windows))]
mod fallback;

#[cfg(not(windows))]
pub use self::fallback::{IdlePump as PlatformPump, LiveButtons};

/// Whether the platform pump sees input regardless of window focus.
pub const HAS_GLOBAL_HOOKS: bool = cfg!(windows);
