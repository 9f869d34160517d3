use std::cell::RefCell;
use std::sync::Arc;
use std::sync::mpsc::Sender;

use tracing::{debug, error, warn};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, VK_LBUTTON, VK_RBUTTON};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, MSG,
    MSLLHOOKSTRUCT, PM_NOREMOVE, PeekMessageW, PostThreadMessageW, SetWindowsHookExW,
    TranslateMessage, UnhookWindowsHookEx, WH_KEYBOARD_LL, WH_MOUSE_LL, WM_KEYDOWN, WM_KEYUP,
    WM_MOUSEMOVE, WM_QUIT, WM_SYSKEYDOWN, WM_SYSKEYUP, WM_USER,
};

use crate::input::hook::{MessagePump, QuitSignal};
use crate::traits::input::{ButtonProbe, ButtonSnapshot, InputListener, KeyCode};
use crate::util::error::OverlayError;

thread_local! {
    // Hook procs run on the thread that installed them, inside GetMessageW.
    static LISTENER: RefCell<Option<Arc<dyn InputListener>>> = const { RefCell::new(None) };
}

fn with_listener(f: impl FnOnce(&dyn InputListener)) {
    LISTENER.with(|slot| {
        if let Some(listener) = slot.borrow().as_ref() {
            f(listener.as_ref());
        }
    });
}

/// Pressed state carried by a low-level keyboard message, if any.
///
/// The `SYS` variants arrive while Alt is held and count like plain keys.
fn key_transition(msg: u32) -> Option<bool> {
    match msg {
        WM_KEYDOWN | WM_SYSKEYDOWN => Some(true),
        WM_KEYUP | WM_SYSKEYUP => Some(false),
        _ => None,
    }
}

unsafe extern "system" fn keyboard_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        // SAFETY: for WH_KEYBOARD_LL with HC_ACTION, lparam points to a KBDLLHOOKSTRUCT.
        let info = unsafe { &*(lparam.0 as *const KBDLLHOOKSTRUCT) };
        if let Some(pressed) = key_transition(wparam.0 as u32) {
            with_listener(|l| l.on_key_change(KeyCode(info.vkCode), pressed));
        }
    }
    unsafe { CallNextHookEx(HHOOK::default(), code, wparam, lparam) }
}

unsafe extern "system" fn mouse_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 && wparam.0 as u32 == WM_MOUSEMOVE {
        // SAFETY: for WH_MOUSE_LL with HC_ACTION, lparam points to a MSLLHOOKSTRUCT.
        let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
        with_listener(|l| l.on_pointer_move(info.pt.x, info.pt.y));
    }
    unsafe { CallNextHookEx(HHOOK::default(), code, wparam, lparam) }
}

/// Installed hook, removed on drop.
struct HookGuard(HHOOK);

impl Drop for HookGuard {
    fn drop(&mut self) {
        if let Err(e) = unsafe { UnhookWindowsHookEx(self.0) } {
            warn!("failed to remove hook: {e}");
        }
    }
}

/// Low-level keyboard and mouse hooks pumped by a `GetMessageW` loop.
#[derive(Debug, Default)]
pub struct LowLevelHookPump;

impl LowLevelHookPump {
    pub fn new() -> Self {
        Self
    }
}

impl MessagePump for LowLevelHookPump {
    fn run(
        self: Box<Self>,
        listener: Arc<dyn InputListener>,
        ready: Sender<QuitSignal>,
    ) -> Result<(), OverlayError> {
        LISTENER.with(|slot| *slot.borrow_mut() = Some(listener));
        let result = pump_messages(ready);
        LISTENER.with(|slot| *slot.borrow_mut() = None);
        result
    }
}

fn pump_messages(ready: Sender<QuitSignal>) -> Result<(), OverlayError> {
    let keyboard = unsafe {
        SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_proc), HINSTANCE::default(), 0)
    }
    .map(HookGuard)
    .map_err(|e| OverlayError::HookInstall(format!("keyboard hook: {e}")))?;

    let mouse = unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_proc), HINSTANCE::default(), 0) }
        .map(HookGuard)
        .map_err(|e| OverlayError::HookInstall(format!("mouse hook: {e}")))?;

    let thread_id = unsafe { GetCurrentThreadId() };
    let mut msg = MSG::default();

    // Make sure the message queue exists before anyone posts WM_QUIT to it.
    unsafe {
        let _ = PeekMessageW(&mut msg, HWND::default(), WM_USER, WM_USER, PM_NOREMOVE);
    }

    let quit: QuitSignal = Box::new(move || {
        if let Err(e) = unsafe { PostThreadMessageW(thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) } {
            error!("failed to post quit to input thread: {e}");
        }
    });
    ready
        .send(quit)
        .map_err(|_| OverlayError::HookInstall("owner went away during startup".to_string()))?;
    debug!(thread_id, "hooks installed");

    loop {
        let result = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };
        // 0 is WM_QUIT, -1 is an error.
        if result.0 <= 0 {
            break;
        }
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    drop(mouse);
    drop(keyboard);
    Ok(())
}

/// Physical mouse buttons, queried live from the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveButtons;

impl ButtonProbe for LiveButtons {
    fn snapshot(&self) -> ButtonSnapshot {
        // High bit set means the button is down right now.
        let down = |vk: i32| unsafe { GetAsyncKeyState(vk) } < 0;
        ButtonSnapshot {
            left: down(i32::from(VK_LBUTTON.0)),
            right: down(i32::from(VK_RBUTTON.0)),
        }
    }
}
