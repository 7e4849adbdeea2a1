//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::time::{Duration, Instant};

use eframe::egui;

use crate::state::{AppSettings, CameraPhase, CameraState, ConfiguredAccess};
use crate::ui::{fallback, prompt_card};
use crate::viewport::{GlFrameSink, ViewportPanel};
use cake_gui_lib::command;
use cake_gui_lib::session::CakeSession;

/// Startup inputs parsed from the command line
#[derive(Default)]
pub struct LaunchOptions {
    pub selection: Option<shared::Selection>,
    /// JSON command array, replayed once the render surface is attached
    pub script: Option<String>,
}

/// Main application
pub struct CakeApp {
    session: CakeSession<GlFrameSink>,
    settings: AppSettings,
    viewport: ViewportPanel,
    camera: CameraState,
    pending_script: Option<String>,
    show_settings_window: bool,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl CakeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        let settings = AppSettings::load();
        crate::i18n::set_lang(settings.ui.language);

        styles::configure_styles(&cc.egui_ctx, settings.ui.font_size);

        let mut viewport = ViewportPanel::new();
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let mut session = CakeSession::new(&settings);
        if let Some(selection) = launch.selection {
            session.load_selection(selection);
        }

        let mut access = ConfiguredAccess {
            grant: settings.camera.grant_access,
        };
        let camera = CameraState::request(&mut access, &settings.camera);

        let last_font_size = settings.ui.font_size;

        Self {
            session,
            settings,
            viewport,
            camera,
            pending_script: launch.script,
            show_settings_window: false,
            last_font_size,
        }
    }

    /// Attach the GL sink once the camera is ready, then replay any script
    fn attach_surface(&mut self, ctx: &egui::Context) {
        if self.session.render_context().is_attached() || self.session.render_context().is_released() {
            return;
        }
        let size = ctx.screen_rect().size();
        let aspect = if size.y > 0.0 { size.x / size.y } else { 1.0 };
        self.session.attach_surface(self.viewport.sink(), aspect);

        if let Some(script) = self.pending_script.take() {
            match command::execute_json_batch(&mut self.session, &script) {
                Ok(responses) => {
                    let failed = responses.iter().filter(|r| !r.success).count();
                    for r in responses.iter().filter(|r| !r.success) {
                        tracing::warn!("Script command failed: {}", r.error.as_deref().unwrap_or("?"));
                    }
                    tracing::info!(
                        "Replayed {} script commands ({failed} failed)",
                        responses.len()
                    );
                }
                Err(e) => tracing::error!("Startup script rejected: {e}"),
            }
        }
    }
}

impl eframe::App for CakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.settings.ui.font_size);
            self.last_font_size = self.settings.ui.font_size;
        }

        // ── Top bar ───────────────────────────────────────────
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            menus::top_bar(ui, &mut self.settings, &mut self.show_settings_window);
        });
        menus::settings_window(ctx, &mut self.settings, &mut self.show_settings_window);

        let phase = self.camera.poll(Instant::now());
        if phase != CameraPhase::Ready {
            let feed_painted = egui::CentralPanel::default()
                .show(ctx, |ui| fallback::show(ui, phase))
                .inner;
            // The backdrop is the desktop feed; its first frame means ready
            if feed_painted {
                self.camera.mark_ready();
            }
            if phase != CameraPhase::Denied {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            return;
        }

        self.attach_surface(ctx);
        keyboard::handle_keyboard(ctx, &mut self.session);

        // ── Prompt card ──────────────────────────────────────
        egui::TopBottomPanel::bottom("prompt_card")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(10)))
            .show(ctx, |ui| {
                prompt_card::show(ui, &mut self.session);
            });

        // ── Central panel: AR viewport ───────────────────────
        let outcome = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.viewport.show(ui, &mut self.session))
            .inner;

        if outcome.reschedule() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        self.session.teardown();
        if let Some(gl) = gl {
            self.viewport.destroy(gl);
        }
        self.settings.save();
        tracing::info!("Session closed after {} frames", self.session.frames_submitted());
    }
}
