/// Platform virtual-key code as reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

/// Receiver for raw input events.
/// Implementations: InputObserver (production), test recorders.
///
/// Called from the observer thread, so implementations must be thread-safe.
pub trait InputListener: Send + Sync {
    /// A key went down (`pressed == true`) or up.
    fn on_key_change(&self, key: KeyCode, pressed: bool);

    /// The pointer moved to absolute position (`x`, `y`).
    fn on_pointer_move(&self, x: i32, y: i32);
}

/// Live state of the two physical mouse buttons at sample time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSnapshot {
    pub left: bool,
    pub right: bool,
}

impl ButtonSnapshot {
    pub const RELEASED: Self = Self {
        left: false,
        right: false,
    };

    /// Whether either button is held.
    pub fn any(&self) -> bool {
        self.left || self.right
    }
}

/// Synchronous query of the current mouse button state.
/// Implementations: LiveButtons (production), fixed snapshots (testing).
pub trait ButtonProbe {
    fn snapshot(&self) -> ButtonSnapshot;
}

impl ButtonProbe for ButtonSnapshot {
    fn snapshot(&self) -> ButtonSnapshot {
        *self
    }
}
