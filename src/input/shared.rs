use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU8, Ordering};

use parking_lot::Mutex;

use crate::input::key_state::KeyMap;
use crate::input::orientation::Orientation;
use crate::traits::input::KeyCode;

/// Pointer position before the first sample.
const NO_POSITION: i64 = i64::MIN;

/// Input state written by the observer thread and sampled by the render loop.
///
/// The key map sits behind a mutex; everything else is a standalone atomic.
#[derive(Debug)]
pub struct SharedInputState {
    keys: Mutex<KeyMap>,
    orientation: AtomicU8,
    pointer_x: AtomicI64,
    pointer_y: AtomicI64,
    delta_x: AtomicI64,
    delta_y: AtomicI64,
}

impl Default for SharedInputState {
    fn default() -> Self {
        Self {
            keys: Mutex::new(KeyMap::new()),
            orientation: AtomicU8::new(Orientation::None.as_u8()),
            pointer_x: AtomicI64::new(NO_POSITION),
            pointer_y: AtomicI64::new(NO_POSITION),
            delta_x: AtomicI64::new(0),
            delta_y: AtomicI64::new(0),
        }
    }
}

impl SharedInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state behind an `Arc`, ready to hand to both threads.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_u8(self.orientation.load(Ordering::Acquire))
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.orientation
            .store(orientation.as_u8(), Ordering::Release);
    }

    /// Move from `None` to `Default`. Any other value is left alone.
    /// Returns true if the promotion happened.
    pub fn promote_to_default(&self) -> bool {
        self.orientation
            .compare_exchange(
                Orientation::None.as_u8(),
                Orientation::Default.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub fn set_key(&self, key: KeyCode, pressed: bool) {
        let mut keys = self.keys.lock();
        if pressed {
            keys.on_press(key);
        } else {
            keys.on_release(key);
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.lock().is_pressed(key)
    }

    pub fn pressed_count(&self) -> usize {
        self.keys.lock().pressed_count()
    }

    /// Store a new absolute pointer position and return the delta from the
    /// previous one. The first sample only establishes the baseline.
    ///
    /// Only the observer thread writes the position, so load-then-store is
    /// not racy.
    pub fn record_pointer(&self, x: i32, y: i32) -> Option<(i64, i64)> {
        let (x, y) = (i64::from(x), i64::from(y));
        let prev_x = self.pointer_x.swap(x, Ordering::AcqRel);
        let prev_y = self.pointer_y.swap(y, Ordering::AcqRel);

        if prev_x == NO_POSITION || prev_y == NO_POSITION {
            return None;
        }

        let (dx, dy) = (x - prev_x, y - prev_y);
        self.delta_x.store(dx, Ordering::Release);
        self.delta_y.store(dy, Ordering::Release);
        Some((dx, dy))
    }

    /// Last recorded absolute pointer position, if any.
    pub fn pointer(&self) -> Option<(i64, i64)> {
        let x = self.pointer_x.load(Ordering::Acquire);
        let y = self.pointer_y.load(Ordering::Acquire);
        (x != NO_POSITION && y != NO_POSITION).then_some((x, y))
    }

    /// Delta between the last two pointer samples.
    pub fn pointer_delta(&self) -> (i64, i64) {
        (
            self.delta_x.load(Ordering::Acquire),
            self.delta_y.load(Ordering::Acquire),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_state() {
        let state = SharedInputState::new();
        assert_eq!(state.orientation(), Orientation::None);
        assert_eq!(state.pressed_count(), 0);
        assert_eq!(state.pointer(), None);
        assert_eq!(state.pointer_delta(), (0, 0));
    }

    #[test]
    fn test_first_pointer_sample_is_baseline() {
        let state = SharedInputState::new();
        assert_eq!(state.record_pointer(100, 200), None);
        assert_eq!(state.pointer(), Some((100, 200)));
        assert_eq!(state.record_pointer(103, 198), Some((3, -2)));
        assert_eq!(state.pointer_delta(), (3, -2));
    }

    #[test]
    fn test_promote_only_from_none() {
        let state = SharedInputState::new();
        assert!(state.promote_to_default());
        assert_eq!(state.orientation(), Orientation::Default);
        assert!(!state.promote_to_default());

        state.set_orientation(Orientation::Left);
        assert!(!state.promote_to_default());
        assert_eq!(state.orientation(), Orientation::Left);
    }

    #[test]
    fn test_keys_shared_across_threads() {
        let state = SharedInputState::new_shared();
        let writer = Arc::clone(&state);
        thread::spawn(move || {
            for code in 0..10 {
                writer.set_key(KeyCode(code), true);
            }
            writer.set_key(KeyCode(3), false);
        })
        .join()
        .unwrap();

        assert_eq!(state.pressed_count(), 9);
        assert!(!state.is_key_pressed(KeyCode(3)));
        assert!(state.is_key_pressed(KeyCode(9)));
    }
}
