//! Per-tick scene update and submission.

use crate::build::animate_preview;
use crate::render::{RenderContext, Renderer};
use crate::state::rotation::RotationState;
use crate::state::transition::ColorTransition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame went to the renderer
    Submitted,
    /// Renderer, camera or scene not ready yet
    Skipped,
    /// The loop was stopped; nothing will be submitted again
    Cancelled,
}

impl FrameOutcome {
    /// Whether the caller should schedule another tick
    pub fn reschedule(self) -> bool {
        !matches!(self, FrameOutcome::Cancelled)
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    cancelled: bool,
    submitted: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&mut self) {
        if !self.cancelled {
            tracing::debug!("Frame loop stopped after {} frames", self.submitted);
        }
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn frames_submitted(&self) -> u64 {
        self.submitted
    }

    pub fn tick<R: Renderer>(
        &mut self,
        ctx: &mut RenderContext<R>,
        rotation: &RotationState,
        transition: &mut Option<ColorTransition>,
    ) -> FrameOutcome {
        if self.cancelled {
            return FrameOutcome::Cancelled;
        }
        let Some((renderer, camera, scene)) = ctx.parts_mut() else {
            return FrameOutcome::Skipped;
        };

        if let Some(base) = scene.base_mut() {
            base.transform.rotation.y = rotation.yaw;
            base.transform.rotation.x = rotation.pitch;

            if let Some(tr) = transition.as_mut() {
                if !tr.advance(base) {
                    tracing::debug!("Color transition finished");
                    *transition = None;
                }
            }
        }

        if let Some(preview) = scene.preview_mut() {
            animate_preview(preview, self.submitted);
        }

        renderer.render(scene, camera);
        self.submitted += 1;
        FrameOutcome::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{build_base, build_tiered_preview, consts::ICING_NODE};
    use crate::render::RecordingRenderer;
    use shared::{CakeShape, HexColor};

    fn attached() -> (RenderContext<RecordingRenderer>, RecordingRenderer) {
        let renderer = RecordingRenderer::new();
        let probe = renderer.clone();
        let mut ctx = RenderContext::new();
        ctx.attach(renderer, 1.0);
        (ctx, probe)
    }

    #[test]
    fn test_skipped_without_surface() {
        let mut ctx: RenderContext<RecordingRenderer> = RenderContext::new();
        let mut fl = FrameLoop::new();
        let out = fl.tick(&mut ctx, &RotationState::default(), &mut None);
        assert_eq!(out, FrameOutcome::Skipped);
        assert!(out.reschedule());
    }

    #[test]
    fn test_submits_and_applies_rotation() {
        let (mut ctx, probe) = attached();
        if let Some(scene) = ctx.scene.as_mut() {
            scene.set_base(Some(build_base(CakeShape::Circle, 1.0, HexColor::WHITE)));
        }
        let rot = RotationState {
            yaw: 0.5,
            pitch: -0.25,
        };
        let mut fl = FrameLoop::new();
        assert_eq!(fl.tick(&mut ctx, &rot, &mut None), FrameOutcome::Submitted);

        let base = ctx.scene.as_ref().unwrap().base().unwrap();
        assert_eq!(base.transform.rotation.y, 0.5);
        assert_eq!(base.transform.rotation.x, -0.25);
        assert_eq!(probe.snapshot().frames, 1);
        assert_eq!(probe.snapshot().last_mesh_count, 1);
    }

    #[test]
    fn test_submits_empty_scene() {
        let (mut ctx, probe) = attached();
        let mut fl = FrameLoop::new();
        assert_eq!(
            fl.tick(&mut ctx, &RotationState::default(), &mut None),
            FrameOutcome::Submitted
        );
        assert_eq!(probe.snapshot().last_mesh_count, 0);
    }

    #[test]
    fn test_stopped_loop_never_submits() {
        let (mut ctx, probe) = attached();
        let mut fl = FrameLoop::new();
        fl.stop();
        for _ in 0..3 {
            let out = fl.tick(&mut ctx, &RotationState::default(), &mut None);
            assert_eq!(out, FrameOutcome::Cancelled);
            assert!(!out.reschedule());
        }
        assert_eq!(probe.snapshot().frames, 0);
    }

    #[test]
    fn test_transition_cleared_on_completion() {
        let (mut ctx, _probe) = attached();
        if let Some(scene) = ctx.scene.as_mut() {
            scene.set_base(Some(build_base(CakeShape::Circle, 1.0, HexColor::WHITE)));
        }
        let mut tr = Some(ColorTransition::new([0.0, 0.0, 0.0]));
        let mut fl = FrameLoop::new();

        fl.tick(&mut ctx, &RotationState::default(), &mut tr);
        assert!(ctx.scene.as_ref().unwrap().base().unwrap().child(ICING_NODE).is_some());

        for _ in 0..60 {
            fl.tick(&mut ctx, &RotationState::default(), &mut tr);
        }
        assert!(tr.is_none());
        let base = ctx.scene.as_ref().unwrap().base().unwrap();
        assert!(base.child(ICING_NODE).is_none());
        assert_eq!(base.material().unwrap().color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_preview_spins_each_frame() {
        let (mut ctx, _probe) = attached();
        if let Some(scene) = ctx.scene.as_mut() {
            scene.set_preview(Some(build_tiered_preview(CakeShape::Circle, HexColor::WHITE)));
        }
        let mut fl = FrameLoop::new();
        for _ in 0..10 {
            fl.tick(&mut ctx, &RotationState::default(), &mut None);
        }
        let preview = ctx.scene.as_ref().unwrap().preview().unwrap();
        assert!((preview.transform.rotation.y - 0.15).abs() < 1e-5);
    }
}
