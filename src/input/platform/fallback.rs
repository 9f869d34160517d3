use std::sync::Arc;
use std::sync::mpsc::{self, Sender};

use macroquad::input::{MouseButton, is_mouse_button_down};
use tracing::warn;

use crate::input::hook::{MessagePump, QuitSignal};
use crate::traits::input::{ButtonProbe, ButtonSnapshot, InputListener};
use crate::util::error::OverlayError;

/// Pump for platforms without global hooks: waits for quit and nothing else.
#[derive(Debug, Default)]
pub struct IdlePump;

impl IdlePump {
    pub fn new() -> Self {
        Self
    }
}

impl MessagePump for IdlePump {
    fn run(
        self: Box<Self>,
        _listener: Arc<dyn InputListener>,
        ready: Sender<QuitSignal>,
    ) -> Result<(), OverlayError> {
        warn!("global input hooks are not available on this platform; only window input is seen");

        let (quit_tx, quit_rx) = mpsc::channel::<()>();
        ready
            .send(Box::new(move || {
                let _ = quit_tx.send(());
            }))
            .map_err(|_| OverlayError::HookInstall("owner went away during startup".to_string()))?;

        // A closed channel also means the owner is gone.
        let _ = quit_rx.recv();
        Ok(())
    }
}

/// Mouse buttons as seen by the overlay window.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveButtons;

impl ButtonProbe for LiveButtons {
    fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            left: is_mouse_button_down(MouseButton::Left),
            right: is_mouse_button_down(MouseButton::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::hook::HookThread;
    use crate::input::{InputObserver, SharedInputState};

    #[test]
    fn test_idle_pump_starts_and_stops() {
        let state = SharedInputState::new_shared();
        let listener: Arc<dyn InputListener> = Arc::new(InputObserver::new(state));
        let thread = HookThread::spawn(Box::new(IdlePump::new()), listener).unwrap();
        assert!(thread.is_running());
        thread.shutdown().unwrap();
    }
}
