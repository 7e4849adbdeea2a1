//! Headless test harness: a seeded session over a recording renderer.

use shared::{CakeShape, HeightInches, HexColor, Selection};

use crate::fixtures;
use crate::frame_loop::FrameOutcome;
use crate::render::{RecordingRenderer, RenderLog};
use crate::scene::{Node, Scene};
use crate::session::CakeSession;
use crate::state::AppSettings;
use crate::validation::MeshValidator;
use crate::viewport::mesh::tessellate;

/// Headless harness: session + a probe on the renderer it owns
pub struct TestHarness {
    pub session: CakeSession<RecordingRenderer>,
    probe: RecordingRenderer,
}

impl TestHarness {
    /// Seeded session with an attached surface.
    pub fn new() -> Self {
        Self::with_settings(&fixtures::seeded_settings())
    }

    /// Attached surface with the given settings.
    pub fn with_settings(settings: &AppSettings) -> Self {
        let mut h = Self::detached(settings);
        let renderer = h.probe.clone();
        h.session.attach_surface(renderer, 1.0);
        h
    }

    /// Session whose surface has not been attached yet.
    pub fn detached(settings: &AppSettings) -> Self {
        Self {
            session: CakeSession::new(settings),
            probe: RecordingRenderer::new(),
        }
    }

    /// Attach the surface later (after a detached start).
    pub fn attach(&mut self) -> bool {
        let renderer = self.probe.clone();
        self.session.attach_surface(renderer, 1.0)
    }

    // ── Operations ────────────────────────────────────────────

    pub fn select_shape(&mut self, shape: CakeShape) {
        self.session.select_shape(shape);
    }

    /// Select a height by inches; invalid values are rejected.
    pub fn select_height(&mut self, inches: u8) -> Result<(), String> {
        let height = HeightInches::new(inches)?;
        self.session.select_height(height);
        Ok(())
    }

    pub fn pick_base_color(&mut self, hex: &str) -> Result<(), String> {
        let color = HexColor::parse(hex)?;
        self.session.pick_base_color(color);
        Ok(())
    }

    pub fn pick_filling(&mut self, hex: &str) -> Result<bool, String> {
        let color = HexColor::parse(hex)?;
        Ok(self.session.pick_filling(color))
    }

    pub fn toggle_topping(&mut self, tag: &str) -> bool {
        self.session.toggle_topping(tag)
    }

    /// One full drag gesture with the given cumulative offsets
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.session.drag_begin();
        self.session.drag_move(dx, dy);
        self.session.drag_end();
    }

    /// Tick `n` times and return the last outcome
    pub fn tick_n(&mut self, n: u32) -> Option<FrameOutcome> {
        (0..n).map(|_| self.session.tick()).last()
    }

    pub fn load_selection_json(&mut self, json: &str) -> Result<(), String> {
        let selection = fixtures::selection_from_json(json)?;
        self.session.load_selection(selection);
        Ok(())
    }

    pub fn export_selection_json(&self) -> String {
        serde_json::to_string_pretty(self.session.selection()).unwrap_or_default()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn selection(&self) -> &Selection {
        self.session.selection()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.session.scene()
    }

    pub fn base(&self) -> Option<&Node> {
        self.scene().and_then(Scene::base)
    }

    /// Number of children in a named group under the base
    pub fn group_len(&self, name: &str) -> Option<usize> {
        self.base()?.child(name).map(|g| g.children.len())
    }

    pub fn mesh_count(&self) -> usize {
        self.scene().map_or(0, Scene::mesh_count)
    }

    pub fn render_log(&self) -> RenderLog {
        self.probe.snapshot()
    }

    /// Tessellate every mesh in the scene and collect validator errors
    pub fn validate_scene_meshes(&self) -> Vec<String> {
        let Some(scene) = self.scene() else {
            return Vec::new();
        };
        scene
            .draw_items()
            .iter()
            .flat_map(|item| {
                let mesh = tessellate(&item.primitive, item.material.color);
                MeshValidator::new(&mesh)
                    .validate_all()
                    .into_iter()
                    .map(move |e| format!("{:?}: {e}", item.primitive))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::consts::*;

    #[test]
    fn test_new_harness_empty_scene() {
        let h = TestHarness::new();
        assert!(h.base().is_none());
        assert_eq!(h.mesh_count(), 0);
        assert_eq!(h.session.wizard().label(), "Step 1 of 5");
    }

    #[test]
    fn test_shape_then_height() {
        let mut h = TestHarness::new();
        h.select_shape(CakeShape::Circle);
        h.select_height(12).unwrap();
        let base = h.base().unwrap();
        assert_eq!(base.transform.scale.y, BASE_SCALE * 2.0);
        assert!(h.select_height(7).is_err());
        assert_eq!(h.selection().height.map(|v| v.inches()), Some(12));
    }

    #[test]
    fn test_decorated_scene_validates() {
        let mut h = TestHarness::new();
        h.select_shape(CakeShape::Circle);
        h.pick_filling("#FDA4AF").unwrap();
        h.toggle_topping("Rainbow Sprinkles");
        h.toggle_topping("Cream");
        assert!(h.validate_scene_meshes().is_empty());
        assert_eq!(
            h.mesh_count(),
            1 + 1 + DRIP_COUNT + SPRINKLE_COUNT * 5 + CREAM_DOLLOPS
        );
    }

    #[test]
    fn test_export_load_round_trip() {
        let mut h = TestHarness::new();
        h.select_shape(CakeShape::Circle);
        h.select_height(8).unwrap();
        h.toggle_topping("Oreo");
        let json = h.export_selection_json();

        let mut h2 = TestHarness::new();
        h2.load_selection_json(&json).unwrap();
        assert_eq!(h2.selection(), h.selection());
        assert_eq!(h2.group_len(TOPPINGS_GROUP), Some(SPRINKLE_COUNT));
    }
}
