//! Ownership of the input-observer thread.
//!
//! The thread runs a [`MessagePump`], which installs the platform hooks,
//! reports a [`QuitSignal`] once it is listening, and then blocks in its
//! message wait until that signal fires. Hooks are installed and released on
//! the pump's own thread; the owner never terminates the thread forcibly.

use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, error, info};

use crate::traits::input::InputListener;
use crate::util::error::OverlayError;

/// Ends a running pump's message loop. Safe to call from any thread.
pub type QuitSignal = Box<dyn FnOnce() + Send>;

/// A message loop that delivers input events to a listener.
pub trait MessagePump: Send + 'static {
    /// Run on the observer thread until the quit signal fires.
    ///
    /// Must send exactly one [`QuitSignal`] on `ready` once events can be
    /// delivered, or return an error without sending one.
    fn run(
        self: Box<Self>,
        listener: Arc<dyn InputListener>,
        ready: Sender<QuitSignal>,
    ) -> Result<(), OverlayError>;
}

/// Handle to the running observer thread. Dropping it shuts the thread down.
pub struct HookThread {
    quit: Option<QuitSignal>,
    handle: Option<JoinHandle<Result<(), OverlayError>>>,
}

impl HookThread {
    /// Start `pump` on a dedicated thread and wait until it is listening.
    pub fn spawn(
        pump: Box<dyn MessagePump>,
        listener: Arc<dyn InputListener>,
    ) -> Result<Self, OverlayError> {
        let (ready_tx, ready_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("input-observer".to_string())
            .spawn(move || pump.run(listener, ready_tx))
            .map_err(|e| OverlayError::HookInstall(format!("failed to spawn thread: {e}")))?;

        match ready_rx.recv() {
            Ok(quit) => {
                info!("input observer started");
                Ok(Self {
                    quit: Some(quit),
                    handle: Some(handle),
                })
            }
            // The pump exited without becoming ready; surface its reason.
            Err(_) => match handle.join() {
                Ok(Err(e)) => Err(e),
                Ok(Ok(())) => Err(OverlayError::HookInstall(
                    "input pump exited before it was ready".to_string(),
                )),
                Err(_) => Err(OverlayError::ObserverPanicked),
            },
        }
    }

    /// Whether the thread has not been joined yet.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Signal the pump to quit and join the thread.
    pub fn shutdown(mut self) -> Result<(), OverlayError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), OverlayError> {
        if let Some(quit) = self.quit.take() {
            debug!("signalling input observer to quit");
            quit();
        }

        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        let result = match handle.join() {
            Ok(result) => result,
            Err(_) => Err(OverlayError::ObserverPanicked),
        };

        match &result {
            Ok(()) => info!("input observer stopped"),
            Err(e) => error!("input observer stopped with error: {e}"),
        }
        result
    }
}

impl Drop for HookThread {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
