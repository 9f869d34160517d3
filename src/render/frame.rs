use tracing::debug;

use crate::input::{Orientation, SharedInputState};
use crate::render::select::{FramePlan, FrameSample, KeyboardAnimator, plan_frame};
use crate::render::sprite_sheet::SpriteSheet;
use crate::traits::input::ButtonSnapshot;
use crate::traits::render::{Color, DstRect, RenderBackend};
use crate::util::error::OverlayError;

/// Draws one overlay frame per call from the shared input state.
pub struct FrameRenderer {
    sheet: SpriteSheet,
    animator: KeyboardAnimator,
    background: Color,
    target: DstRect,
}

impl FrameRenderer {
    pub fn new(sheet: SpriteSheet, background: Color, target: DstRect) -> Self {
        Self {
            sheet,
            animator: KeyboardAnimator::new(),
            background,
            target,
        }
    }

    /// Take a snapshot of everything this frame depends on.
    ///
    /// A click before any other input counts as the first input, so the
    /// orientation leaves `None` here just as it does on the first keystroke.
    pub fn sample(input: &SharedInputState, buttons: ButtonSnapshot) -> FrameSample {
        let orientation = input.orientation();
        // This frame still draws from `None`; both map to the plain click sprite.
        if buttons.any() && orientation == Orientation::None && input.promote_to_default() {
            debug!("click before any motion, orientation -> Default");
        }
        FrameSample {
            orientation,
            buttons,
            pressed_keys: input.pressed_count(),
        }
    }

    /// Clear, draw the cat, draw the paw overlay if keys are down.
    pub fn draw_frame<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        input: &SharedInputState,
        buttons: ButtonSnapshot,
    ) -> Result<FramePlan, OverlayError> {
        let sample = Self::sample(input, buttons);
        let plan = plan_frame(sample, &mut self.animator);

        self.draw_plan(backend, plan)
            .map_err(|e| OverlayError::Render(format!("{e:#}")))?;
        Ok(plan)
    }

    fn draw_plan<B: RenderBackend>(&self, backend: &mut B, plan: FramePlan) -> anyhow::Result<()> {
        backend.begin_frame()?;
        backend.clear(self.background)?;
        backend.draw_sprite(self.sheet.texture(plan.base), self.target)?;
        if let Some(overlay) = plan.overlay {
            backend.draw_sprite(self.sheet.texture(overlay), self.target)?;
        }
        backend.end_frame()
    }

    /// Give the textures back to the backend.
    pub fn release<B: RenderBackend>(self, backend: &mut B) {
        self.sheet.release(backend);
    }
}
