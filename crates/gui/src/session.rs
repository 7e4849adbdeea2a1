//! One customization session: selection, wizard, rotation and the render
//! context, wired so that every selection change reaches the scene.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{CakeShape, HeightInches, HexColor, Selection};

use crate::build::{self, consts::TOPPINGS_GROUP};
use crate::frame_loop::{FrameLoop, FrameOutcome};
use crate::render::{RenderContext, Renderer};
use crate::scene::Scene;
use crate::state::{
    AppSettings, ColorMode, ColorTransition, GestureMapper, RotationState, Wizard, WizardVariant,
};

pub struct CakeSession<R: Renderer> {
    selection: Selection,
    wizard: Wizard,
    rotation: RotationState,
    gesture: GestureMapper,
    transition: Option<ColorTransition>,
    color_mode: ColorMode,
    ctx: RenderContext<R>,
    frame_loop: FrameLoop,
    rng: StdRng,
}

impl<R: Renderer> CakeSession<R> {
    pub fn new(settings: &AppSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            selection: Selection::default(),
            wizard: Wizard::new(settings.features.variant),
            rotation: RotationState::default(),
            gesture: GestureMapper::default(),
            transition: None,
            color_mode: settings.features.color_mode,
            ctx: RenderContext::new(),
            frame_loop: FrameLoop::new(),
            rng,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn transition(&self) -> Option<&ColorTransition> {
        self.transition.as_ref()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.ctx.scene.as_ref()
    }

    pub fn render_context(&self) -> &RenderContext<R> {
        &self.ctx
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    fn has_base(&self) -> bool {
        self.scene().is_some_and(|s| s.base().is_some())
    }

    fn allows_decorations(&self, what: &str) -> bool {
        if self.wizard.variant() == WizardVariant::Simple {
            tracing::warn!("{what} is not available in the simple wizard");
            return false;
        }
        true
    }

    // ── Surface ──────────────────────────────────────────────

    /// Create camera and scene around `renderer`. Builds the base right away
    /// if a shape is already chosen.
    pub fn attach_surface(&mut self, renderer: R, aspect: f32) -> bool {
        if !self.ctx.attach(renderer, aspect) {
            return false;
        }
        tracing::info!("Render surface attached (aspect {aspect:.3})");
        if self.selection.shape.is_some() {
            self.rebuild();
        }
        true
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if let Some(camera) = self.ctx.camera.as_mut() {
            camera.set_aspect(aspect);
        }
    }

    /// Replace the whole selection (preload from JSON or a script)
    pub fn load_selection(&mut self, selection: Selection) {
        self.selection = selection;
        if self.wizard.variant() == WizardVariant::Simple {
            self.selection.filling_color = None;
            self.selection.toppings.clear();
        }
        self.rebuild();
    }

    /// Rebuild the base from the selection, re-attaching filling and toppings
    fn rebuild(&mut self) {
        let Some(scene) = self.ctx.scene.as_mut() else {
            return;
        };
        let cake = build::build_cake(&self.selection, &mut self.rng);
        tracing::debug!(
            "Rebuilt cake: {} meshes",
            cake.as_ref().map_or(0, |c| c.mesh_count())
        );
        scene.set_base(cake);
        self.transition = None;
        self.refresh_preview();
    }

    /// Rebuild an open preview from the current shape and color
    fn refresh_preview(&mut self) {
        let Some(scene) = self.ctx.scene.as_mut() else {
            return;
        };
        if scene.preview().is_none() {
            return;
        }
        let preview = self
            .selection
            .shape
            .map(|shape| build::build_tiered_preview(shape, self.selection.base_color));
        scene.set_preview(preview);
    }

    pub fn preview_open(&self) -> bool {
        self.scene().is_some_and(|s| s.preview().is_some())
    }

    /// Open or close the tiered showcase. Needs a chosen shape and an
    /// attached surface. Returns whether the preview is open afterwards.
    pub fn toggle_preview(&mut self) -> bool {
        let Some(scene) = self.ctx.scene.as_mut() else {
            return false;
        };
        if scene.preview().is_some() {
            scene.set_preview(None);
            tracing::info!("Preview closed");
            return false;
        }
        let Some(shape) = self.selection.shape else {
            tracing::debug!("Preview needs a shape");
            return false;
        };
        scene.set_preview(Some(build::build_tiered_preview(
            shape,
            self.selection.base_color,
        )));
        tracing::info!("Preview opened for {}", shape.name());
        true
    }

    // ── Selection ────────────────────────────────────────────

    /// Set the shape, rebuild, and move on to the height step
    pub fn select_shape(&mut self, shape: CakeShape) {
        tracing::info!("Shape selected: {}", shape.name());
        self.selection.shape = Some(shape);
        self.rebuild();
        if self.wizard.step() == crate::state::Step::Base {
            self.wizard.next(&self.selection);
        }
    }

    pub fn select_height(&mut self, height: HeightInches) {
        tracing::info!("Height selected: {} in", height.inches());
        self.selection.height = Some(height);
        self.rebuild();
    }

    pub fn pick_base_color(&mut self, color: HexColor) {
        tracing::info!("Base color picked: {color}");
        self.selection.base_color = color;
        match self.color_mode {
            ColorMode::Instant => self.rebuild(),
            ColorMode::Animated => {
                if self.has_base() {
                    self.transition = Some(ColorTransition::new(color.to_rgb()));
                }
                self.refresh_preview();
            }
        }
    }

    /// Swap the filling subtree. No-op (selection untouched) without a base.
    pub fn pick_filling(&mut self, color: HexColor) -> bool {
        if !self.allows_decorations("Filling") {
            return false;
        }
        if !self.has_base() {
            tracing::debug!("Filling {color} ignored: no base yet");
            return false;
        }
        tracing::info!("Filling picked: {color}");
        self.selection.filling_color = Some(color);
        let filling = build::build_filling(color, &mut self.rng);
        if let Some(scene) = self.ctx.scene.as_mut() {
            scene.attach_to_base(filling);
        }
        true
    }

    /// Toggle a topping tag and patch the toppings subtree when a base exists
    pub fn toggle_topping(&mut self, tag: &str) -> bool {
        if !self.allows_decorations("Toppings") {
            return false;
        }
        self.selection.toppings.toggle(tag);
        tracing::info!("Toppings now: {:?}", self.selection.toppings.as_slice());

        let Some(scene) = self.ctx.scene.as_mut() else {
            return true;
        };
        if scene.base().is_none() {
            return true;
        }
        if self.selection.toppings.is_empty() {
            scene.detach_from_base(TOPPINGS_GROUP);
        } else {
            let group = build::build_toppings(self.selection.toppings.as_slice(), &mut self.rng);
            scene.attach_to_base(group);
        }
        true
    }

    // ── Wizard ───────────────────────────────────────────────

    pub fn next(&mut self) -> bool {
        let moved = self.wizard.next(&self.selection);
        if !moved {
            tracing::debug!("Next refused on {:?}", self.wizard.step());
        }
        moved
    }

    pub fn back(&mut self) -> bool {
        self.wizard.back()
    }

    /// Clear shape, height and rotation and return to the first step
    pub fn reset(&mut self) {
        tracing::info!("Session reset");
        self.selection.shape = None;
        self.selection.height = None;
        self.rotation.clear();
        self.gesture.end();
        self.wizard.reset();
        self.transition = None;
        if let Some(scene) = self.ctx.scene.as_mut() {
            scene.set_base(None);
            scene.set_preview(None);
        }
    }

    // ── Gestures ─────────────────────────────────────────────

    pub fn drag_begin(&mut self) {
        self.gesture.begin();
    }

    /// Offsets are cumulative from the drag start
    pub fn drag_move(&mut self, dx: f32, dy: f32) -> bool {
        self.gesture.update(&mut self.rotation, dx, dy)
    }

    pub fn drag_end(&mut self) {
        self.gesture.end();
    }

    // ── Frame loop ───────────────────────────────────────────

    pub fn tick(&mut self) -> FrameOutcome {
        self.frame_loop
            .tick(&mut self.ctx, &self.rotation, &mut self.transition)
    }

    pub fn frames_submitted(&self) -> u64 {
        self.frame_loop.frames_submitted()
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }

    /// Stop the loop and dispose the renderer. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.frame_loop.stop();
        self.ctx.release();
    }
}

impl<R: Renderer> Drop for CakeSession<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
