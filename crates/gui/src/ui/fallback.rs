use egui::Ui;

use crate::i18n::t;
use crate::state::CameraPhase;
use crate::viewport::draw_backdrop;

/// Centered status while the camera is pending, or the static denial panel.
/// Returns true once a feed frame has been painted (warming only).
pub fn show(ui: &mut Ui, phase: CameraPhase) -> bool {
    let feed_painted = phase == CameraPhase::Warming && ui.is_rect_visible(ui.max_rect());
    if feed_painted {
        draw_backdrop(ui, ui.max_rect());
    }
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        match phase {
            CameraPhase::Requesting => {
                ui.spinner();
                ui.label(t("camera.requesting"));
            }
            CameraPhase::Warming => {
                ui.spinner();
                ui.label(t("camera.warming"));
            }
            CameraPhase::Denied => {
                ui.heading(t("camera.denied_title"));
                ui.add_space(6.0);
                ui.label(t("camera.denied_body"));
            }
            CameraPhase::Ready => {}
        }
    });
    feed_painted
}
