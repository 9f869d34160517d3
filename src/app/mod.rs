//! The overlay session: startup, the vsync render loop and teardown.

mod controller;

pub use controller::OverlayController;

use macroquad::input::{is_quit_requested, prevent_quit};
use macroquad::window::next_frame;
use tracing::info;

use crate::config::OverlayConfig;
use crate::input::WindowInputForwarder;
use crate::input::platform::{HAS_GLOBAL_HOOKS, LiveButtons, PlatformPump};
use crate::render::MacroquadBackend;
use crate::traits::input::ButtonProbe;
use crate::util::error::OverlayError;

/// Run the overlay until the window is closed.
///
/// Must be awaited from the macroquad main future. On every return path the
/// observer thread has been joined and all textures released.
pub async fn run(config: OverlayConfig) -> Result<(), OverlayError> {
    let mut backend = MacroquadBackend::new();
    let mut controller =
        OverlayController::start(&config, &mut backend, Box::new(PlatformPump::new()))?;

    let mut forwarder = (!HAS_GLOBAL_HOOKS).then(WindowInputForwarder::new);
    let buttons = LiveButtons;

    // Closing the window ends the loop instead of the process.
    prevent_quit();

    let result = loop {
        if let Some(forwarder) = forwarder.as_mut() {
            forwarder.poll(controller.listener());
        }

        if let Err(e) = controller.frame(&mut backend, buttons.snapshot()) {
            break Err(e);
        }

        next_frame().await;

        if is_quit_requested() {
            info!("window close requested");
            break Ok(());
        }
    };

    let shutdown = controller.shutdown(&mut backend);
    result.and(shutdown)
}
