use std::sync::Arc;

use tracing::{info, warn};

use crate::config::OverlayConfig;
use crate::input::{HookThread, InputObserver, MessagePump, SharedInputState};
use crate::render::{FramePlan, FrameRenderer, SpriteSheet};
use crate::traits::input::{ButtonSnapshot, InputListener};
use crate::traits::render::RenderBackend;
use crate::util::error::OverlayError;

/// Owns the observer thread and the frame renderer for one overlay session.
///
/// The backend is borrowed per call rather than owned, so it outlives the
/// controller on every exit path and can be inspected afterwards.
pub struct OverlayController {
    input: Arc<SharedInputState>,
    listener: Arc<dyn InputListener>,
    observer: HookThread,
    renderer: FrameRenderer,
}

impl OverlayController {
    /// Start the observer, then load every sprite.
    ///
    /// If any sprite fails to load, the textures already loaded are released
    /// and the observer thread is joined before the error is returned.
    pub fn start<B: RenderBackend>(
        config: &OverlayConfig,
        backend: &mut B,
        pump: Box<dyn MessagePump>,
    ) -> Result<Self, OverlayError> {
        let input = SharedInputState::new_shared();
        let listener: Arc<dyn InputListener> = Arc::new(InputObserver::new(Arc::clone(&input)));
        let observer = HookThread::spawn(pump, Arc::clone(&listener))?;

        let sheet = match SpriteSheet::load(backend, &config.asset_dir) {
            Ok(sheet) => sheet,
            Err(e) => {
                if let Err(join_err) = observer.shutdown() {
                    warn!("observer shutdown after failed startup: {join_err}");
                }
                return Err(e);
            }
        };

        info!(title = %config.title, "overlay ready");
        Ok(Self {
            input,
            listener,
            observer,
            renderer: FrameRenderer::new(sheet, config.background, config.target()),
        })
    }

    pub fn input(&self) -> &Arc<SharedInputState> {
        &self.input
    }

    /// Listener feeding the shared state, for extra input sources.
    pub fn listener(&self) -> &dyn InputListener {
        self.listener.as_ref()
    }

    pub fn observer_running(&self) -> bool {
        self.observer.is_running()
    }

    /// Draw one frame with the given live button state.
    pub fn frame<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        buttons: ButtonSnapshot,
    ) -> Result<FramePlan, OverlayError> {
        self.renderer.draw_frame(backend, &self.input, buttons)
    }

    /// Release textures, then stop and join the observer.
    pub fn shutdown<B: RenderBackend>(self, backend: &mut B) -> Result<(), OverlayError> {
        self.renderer.release(backend);
        self.observer.shutdown()
    }
}
