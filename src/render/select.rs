//! Per-frame sprite selection.
//!
//! Two sources feed one decision: the live button snapshot and the
//! hook-observed orientation and key count. Both arrive as plain values so
//! the choice can be tested without a window or an OS hook.

use tracing::debug;

use crate::input::Orientation;
use crate::render::sprite::{KEYBOARD_VARIATIONS, Sprite};
use crate::traits::input::ButtonSnapshot;

/// Everything sampled at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSample {
    pub orientation: Orientation,
    pub buttons: ButtonSnapshot,
    pub pressed_keys: usize,
}

/// Sprites to draw for one frame, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    pub base: Sprite,
    pub overlay: Option<Sprite>,
}

/// Cat sprite for the given orientation and click state.
pub fn base_sprite(orientation: Orientation, clicking: bool) -> Sprite {
    match (orientation, clicking) {
        (Orientation::Down, true) => Sprite::MouseDownClick,
        (Orientation::Up, true) => Sprite::MouseUpClick,
        (Orientation::Left, true) => Sprite::MouseLeftClick,
        (Orientation::Right, true) => Sprite::MouseRightClick,
        (Orientation::None | Orientation::Default, true) => Sprite::MouseClick,
        (Orientation::Down, false) => Sprite::MouseDown,
        (Orientation::Up, false) => Sprite::MouseUp,
        (Orientation::Left, false) => Sprite::MouseLeft,
        (Orientation::Right, false) => Sprite::MouseRight,
        (Orientation::None, false) => Sprite::Begin,
        (Orientation::Default, false) => Sprite::Idle,
    }
}

/// Cycles the paw overlay each time another key goes down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAnimator {
    variation: usize,
    last_count: usize,
}

impl KeyboardAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current variation index, `0..KEYBOARD_VARIATIONS`.
    pub fn variation(&self) -> usize {
        self.variation
    }

    /// Feed this frame's pressed-key count and get the overlay to draw.
    ///
    /// The variation advances only when the count rose since the previous
    /// call; a held or shrinking chord keeps the current paw on screen.
    pub fn advance(&mut self, pressed_keys: usize) -> Option<Sprite> {
        let overlay = if pressed_keys > 0 {
            if pressed_keys > self.last_count {
                self.variation = (self.variation + 1) % KEYBOARD_VARIATIONS;
                debug!(variation = self.variation, pressed_keys, "paw advanced");
            }
            Some(Sprite::KEYBOARD[self.variation])
        } else {
            None
        };

        self.last_count = pressed_keys;
        overlay
    }
}

/// Decide what to draw for `sample`, advancing `animator`.
pub fn plan_frame(sample: FrameSample, animator: &mut KeyboardAnimator) -> FramePlan {
    FramePlan {
        base: base_sprite(sample.orientation, sample.buttons.any()),
        overlay: animator.advance(sample.pressed_keys),
    }
}
