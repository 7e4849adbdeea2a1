//! Cake viewport: camera backdrop, drag-to-rotate, and the GL paint callback.

mod gl_renderer;
pub use cake_gui_lib::viewport::mesh;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::i18n::t;
use cake_gui_lib::frame_loop::FrameOutcome;
use cake_gui_lib::render::Renderer;
use cake_gui_lib::scene::{AmbientLight, DirectionalLight, DrawItem, PerspectiveCamera, Scene};
use cake_gui_lib::session::CakeSession;
use gl_renderer::GlRenderer;

/// Everything the paint callback needs from one submitted frame
#[derive(Clone)]
pub struct FrameSnapshot {
    pub items: Vec<DrawItem>,
    pub view_projection: glam::Mat4,
    pub version: u64,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

/// `Renderer` that hands frames to the egui paint callback through a shared slot
#[derive(Clone, Default)]
pub struct GlFrameSink {
    slot: Arc<Mutex<Option<FrameSnapshot>>>,
    disposed: Arc<AtomicBool>,
}

impl GlFrameSink {
    fn latest(&self) -> Option<FrameSnapshot> {
        if self.disposed.load(Ordering::Acquire) {
            return None;
        }
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Renderer for GlFrameSink {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        let frame = FrameSnapshot {
            items: scene.draw_items(),
            view_projection: camera.view_projection(),
            version: scene.version(),
            ambient: scene.ambient,
            directional: scene.directional,
        };
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(frame);
        }
    }

    fn dispose(&mut self) {
        self.disposed.store(true, Ordering::Release);
        if let Ok(mut slot) = self.slot.lock() {
            slot.take();
        }
    }
}

pub struct ViewportPanel {
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    sink: GlFrameSink,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            gl_renderer: None,
            sink: GlFrameSink::default(),
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable: {e}"),
        }
    }

    /// Renderer handle to attach to the session
    pub fn sink(&self) -> GlFrameSink {
        self.sink.clone()
    }

    /// Delete GL programs and buffers. Needs the live context, so it runs from `on_exit`.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    /// Handle drag input, tick the session and queue the GL paint.
    pub fn show(&mut self, ui: &mut Ui, session: &mut CakeSession<GlFrameSink>) -> FrameOutcome {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        if rect.height() > 0.0 {
            session.set_aspect(rect.width() / rect.height());
        }

        self.handle_drag(ui, &response, session);

        let outcome = session.tick();

        if ui.is_rect_visible(rect) {
            draw_backdrop(ui, rect);
            self.paint_gl(ui, rect);
            if session.scene().is_some_and(|s| s.base().is_some()) && !session.is_dragging() {
                ui.painter_at(rect).text(
                    egui::pos2(rect.center().x, rect.bottom() - 16.0),
                    egui::Align2::CENTER_BOTTOM,
                    t("hint.drag"),
                    egui::FontId::proportional(12.0),
                    egui::Color32::from_white_alpha(180),
                );
            }
        }

        outcome
    }

    fn handle_drag(
        &self,
        ui: &Ui,
        response: &egui::Response,
        session: &mut CakeSession<GlFrameSink>,
    ) {
        if response.drag_started() {
            session.drag_begin();
        }
        if response.dragged() {
            // Offsets are measured from the press point, not frame to frame
            let offset = ui.input(|i| match (i.pointer.press_origin(), i.pointer.latest_pos()) {
                (Some(origin), Some(pos)) => Some(pos - origin),
                _ => None,
            });
            if let Some(d) = offset {
                session.drag_move(d.x, d.y);
            }
        }
        if response.drag_stopped() {
            session.drag_end();
        }
    }

    fn paint_gl(&self, ui: &mut Ui, rect: egui::Rect) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };
        let renderer = gl_renderer.clone();
        let sink = self.sink.clone();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let Some(frame) = sink.latest() else {
                    return;
                };
                let gl = painter.gl();
                let clip = info.clip_rect_in_pixels();
                let params = gl_renderer::RenderParams {
                    viewport: [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ],
                };
                if let Ok(mut r) = renderer.lock() {
                    r.sync(gl, &frame);
                    r.paint(gl, &frame, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }
}

/// Stand-in for the live camera feed
pub fn draw_backdrop(ui: &Ui, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(38, 42, 48));
    let floor = egui::Rect::from_min_max(egui::pos2(rect.left(), rect.center().y), rect.max);
    painter.rect_filled(floor, 0.0, egui::Color32::from_rgb(58, 54, 50));
}
