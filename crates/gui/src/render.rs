//! Renderer boundary and the per-surface render context.

use std::sync::{Arc, Mutex};

use crate::scene::{PerspectiveCamera, Scene};

/// Anything that can draw a scene from a camera
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera);
    /// Release GPU resources. Called exactly once, by `RenderContext::release`.
    fn dispose(&mut self);
}

/// Renderer, camera and scene of one render surface. Each piece is absent
/// until the surface is attached.
pub struct RenderContext<R: Renderer> {
    renderer: Option<R>,
    pub camera: Option<PerspectiveCamera>,
    pub scene: Option<Scene>,
    released: bool,
}

impl<R: Renderer> Default for RenderContext<R> {
    fn default() -> Self {
        Self {
            renderer: None,
            camera: None,
            scene: None,
            released: false,
        }
    }
}

impl<R: Renderer> RenderContext<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a renderer with a fresh camera and scene. Ignored after release.
    pub fn attach(&mut self, renderer: R, aspect: f32) -> bool {
        if self.released {
            tracing::warn!("Render surface attached after release, ignoring");
            return false;
        }
        self.renderer = Some(renderer);
        self.camera = Some(PerspectiveCamera::new(aspect));
        self.scene = Some(Scene::new());
        true
    }

    pub fn is_attached(&self) -> bool {
        self.renderer.is_some() && self.camera.is_some() && self.scene.is_some()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    /// Split borrow for submission: renderer, camera and scene at once
    pub fn parts_mut(&mut self) -> Option<(&mut R, &PerspectiveCamera, &mut Scene)> {
        match (&mut self.renderer, &self.camera, &mut self.scene) {
            (Some(r), Some(c), Some(s)) => Some((r, c, s)),
            _ => None,
        }
    }

    /// Dispose the renderer once. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(mut renderer) = self.renderer.take() {
            renderer.dispose();
            tracing::debug!("Renderer disposed");
        }
        self.released = true;
    }
}

/// What a `RecordingRenderer` has seen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderLog {
    pub frames: u64,
    pub disposed: u32,
    pub last_mesh_count: usize,
    pub last_scene_version: u64,
}

/// Headless renderer that records submissions. The log handle stays valid
/// after the renderer is moved into a context.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_handle(&self) -> Arc<Mutex<RenderLog>> {
        Arc::clone(&self.log)
    }

    pub fn snapshot(&self) -> RenderLog {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn with_log(&self, f: impl FnOnce(&mut RenderLog)) {
        match self.log.lock() {
            Ok(mut log) => f(&mut log),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, scene: &Scene, _camera: &PerspectiveCamera) {
        self.with_log(|log| {
            log.frames += 1;
            log.last_mesh_count = scene.mesh_count();
            log.last_scene_version = scene.version();
        });
    }

    fn dispose(&mut self) {
        self.with_log(|log| log.disposed += 1);
    }
}
