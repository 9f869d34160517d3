//! Input observer tests driven through the observer thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Sender};

use bongo_overlay::input::{HookThread, InputObserver, MessagePump, Orientation, QuitSignal, SharedInputState};
use bongo_overlay::traits::input::{InputListener, KeyCode};
use bongo_overlay::util::OverlayError;

enum Event {
    Key(u32, bool),
    Move(i32, i32),
}

/// Delivers a fixed event script from the observer thread, then waits for quit.
struct ScriptPump(Vec<Event>);

impl MessagePump for ScriptPump {
    fn run(
        self: Box<Self>,
        listener: Arc<dyn InputListener>,
        ready: Sender<QuitSignal>,
    ) -> Result<(), OverlayError> {
        for event in &self.0 {
            match *event {
                Event::Key(code, pressed) => listener.on_key_change(KeyCode(code), pressed),
                Event::Move(x, y) => listener.on_pointer_move(x, y),
            }
        }
        let (tx, rx) = mpsc::channel::<()>();
        ready
            .send(Box::new(move || {
                let _ = tx.send(());
            }))
            .map_err(|_| OverlayError::HookInstall("no owner".to_string()))?;
        let _ = rx.recv();
        Ok(())
    }
}

fn run_script(events: Vec<Event>) -> Arc<SharedInputState> {
    let state = SharedInputState::new_shared();
    let listener = Arc::new(InputObserver::new(Arc::clone(&state)));
    let thread = HookThread::spawn(Box::new(ScriptPump(events)), listener).unwrap();
    thread.shutdown().unwrap();
    state
}

/// Right, then Down, then sub-threshold jitter leaves Down in place.
#[test]
fn test_orientation_scenario() {
    let state = run_script(vec![Event::Move(100, 100), Event::Move(105, 100)]);
    assert_eq!(state.orientation(), Orientation::Right);

    let state = run_script(vec![
        Event::Move(100, 100),
        Event::Move(105, 100),
        Event::Move(105, 105),
    ]);
    assert_eq!(state.orientation(), Orientation::Down);

    let state = run_script(vec![
        Event::Move(100, 100),
        Event::Move(105, 100),
        Event::Move(105, 105),
        Event::Move(106, 106),
    ]);
    assert_eq!(state.orientation(), Orientation::Down);
}

#[test]
fn test_orientation_none_until_input() {
    let state = run_script(vec![]);
    assert_eq!(state.orientation(), Orientation::None);

    // A lone baseline sample is not motion.
    let state = run_script(vec![Event::Move(0, 0)]);
    assert_eq!(state.orientation(), Orientation::None);
}

#[test]
fn test_first_keystroke_is_default_never_directional() {
    let state = run_script(vec![Event::Key(0x41, true)]);
    assert_eq!(state.orientation(), Orientation::Default);

    let state = run_script(vec![
        Event::Key(0x41, true),
        Event::Key(0x41, false),
        Event::Key(0x42, true),
    ]);
    assert_eq!(state.orientation(), Orientation::Default);
    assert_eq!(state.pressed_count(), 1);
}

#[test]
fn test_jitter_only_keeps_none() {
    let state = run_script(vec![
        Event::Move(50, 50),
        Event::Move(52, 51),
        Event::Move(50, 49),
        Event::Move(51, 51),
    ]);
    assert_eq!(state.orientation(), Orientation::None);
}

#[test]
fn test_large_jump_uses_dominant_axis() {
    let state = run_script(vec![Event::Move(0, 0), Event::Move(-40, 30)]);
    assert_eq!(state.orientation(), Orientation::Left);
    assert_eq!(state.pointer_delta(), (-40, 30));
}
