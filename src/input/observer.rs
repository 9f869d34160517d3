use std::sync::Arc;

use tracing::debug;

use crate::input::orientation::Orientation;
use crate::input::shared::SharedInputState;
use crate::traits::input::{InputListener, KeyCode};

/// Turns raw key and pointer events into [`SharedInputState`] updates.
#[derive(Debug, Clone)]
pub struct InputObserver {
    state: Arc<SharedInputState>,
}

impl InputObserver {
    pub fn new(state: Arc<SharedInputState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &Arc<SharedInputState> {
        &self.state
    }
}

impl InputListener for InputObserver {
    fn on_key_change(&self, key: KeyCode, pressed: bool) {
        if pressed && self.state.promote_to_default() {
            debug!("first keystroke before any motion, orientation -> Default");
        }
        self.state.set_key(key, pressed);
    }

    fn on_pointer_move(&self, x: i32, y: i32) {
        let Some((dx, dy)) = self.state.record_pointer(x, y) else {
            return;
        };

        if let Some(next) = Orientation::from_motion(dx, dy) {
            let prev = self.state.orientation();
            if prev != next {
                debug!(?prev, ?next, dx, dy, "orientation changed");
                self.state.set_orientation(next);
            }
        }
    }
}
