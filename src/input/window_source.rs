use macroquad::input::{get_keys_pressed, get_keys_released, mouse_position};

use crate::traits::input::{InputListener, KeyCode};

/// Feeds the overlay window's own keyboard and pointer input to a listener.
///
/// Used where the platform has no process-wide hooks, so the observer sees
/// at least the input aimed at the overlay itself.
#[derive(Debug, Default)]
pub struct WindowInputForwarder {
    last_pointer: Option<(i32, i32)>,
}

impl WindowInputForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's window input from macroquad and forward it.
    pub fn poll(&mut self, listener: &dyn InputListener) {
        let pressed = get_keys_pressed().into_iter().map(|k| KeyCode(k as u32));
        let released = get_keys_released().into_iter().map(|k| KeyCode(k as u32));
        self.forward(listener, pressed, released, mouse_position());
    }

    /// Forward one frame's worth of window input.
    /// The pointer is only reported when it actually moved.
    pub fn forward(
        &mut self,
        listener: &dyn InputListener,
        pressed: impl IntoIterator<Item = KeyCode>,
        released: impl IntoIterator<Item = KeyCode>,
        pointer: (f32, f32),
    ) {
        for key in pressed {
            listener.on_key_change(key, true);
        }
        for key in released {
            listener.on_key_change(key, false);
        }

        let pointer = (pointer.0.round() as i32, pointer.1.round() as i32);
        if self.last_pointer != Some(pointer) {
            self.last_pointer = Some(pointer);
            listener.on_pointer_move(pointer.0, pointer.1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::orientation::Orientation;
    use crate::input::{InputObserver, SharedInputState};

    #[test]
    fn test_forward_keys_and_motion() {
        let state = SharedInputState::new_shared();
        let observer = InputObserver::new(state.clone());
        let mut forwarder = WindowInputForwarder::new();

        forwarder.forward(&observer, [KeyCode(32)], [], (100.0, 100.0));
        assert_eq!(state.pressed_count(), 1);
        assert_eq!(state.orientation(), Orientation::Default);

        forwarder.forward(&observer, [], [KeyCode(32)], (100.0, 90.0));
        assert_eq!(state.pressed_count(), 0);
        assert_eq!(state.orientation(), Orientation::Up);
    }

    #[test]
    fn test_still_pointer_not_reported() {
        let state = SharedInputState::new_shared();
        let observer = InputObserver::new(state.clone());
        let mut forwarder = WindowInputForwarder::new();

        forwarder.forward(&observer, [], [], (10.0, 10.0));
        forwarder.forward(&observer, [], [], (10.2, 9.9));
        assert_eq!(state.pointer_delta(), (0, 0));
        assert_eq!(state.pointer(), Some((10, 10)));
    }
}
