//! Top bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{AppSettings, ColorMode, WizardVariant};

/// Language switch and settings toggle
pub fn top_bar(ui: &mut egui::Ui, settings: &mut AppSettings, show_settings: &mut bool) {
    ui.horizontal(|ui| {
        ui.strong("Cake AR");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙").on_hover_text(t("settings.title")).clicked() {
                *show_settings = !*show_settings;
            }
            let next = match lang() {
                Lang::En => Lang::Ru,
                Lang::Ru => Lang::En,
            };
            let label = match next {
                Lang::En => "EN",
                Lang::Ru => "RU",
            };
            if ui.button(label).clicked() {
                set_lang(next);
                settings.ui.language = next;
            }
        });
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, settings: &mut AppSettings, open: &mut bool) {
    let mut close_clicked = false;
    egui::Window::new(t("settings.title"))
        .open(open)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(t("settings.variant"));
                egui::ComboBox::from_id_salt("variant_combo")
                    .selected_text(settings.features.variant.display_name())
                    .show_ui(ui, |ui| {
                        for v in WizardVariant::all() {
                            ui.selectable_value(&mut settings.features.variant, *v, v.display_name());
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label(t("settings.color_mode"));
                egui::ComboBox::from_id_salt("color_mode_combo")
                    .selected_text(settings.features.color_mode.display_name())
                    .show_ui(ui, |ui| {
                        for m in ColorMode::all() {
                            ui.selectable_value(&mut settings.features.color_mode, *m, m.display_name());
                        }
                    });
            });
            ui.weak(t("settings.restart_hint"));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(t("settings.language"));
                let before = settings.ui.language;
                ui.selectable_value(&mut settings.ui.language, Lang::En, "English");
                ui.selectable_value(&mut settings.ui.language, Lang::Ru, "Русский");
                if settings.ui.language != before {
                    set_lang(settings.ui.language);
                }
            });

            ui.horizontal(|ui| {
                ui.label(t("settings.font_size"));
                ui.add(egui::Slider::new(&mut settings.ui.font_size, 10.0..=24.0));
            });

            ui.add_space(8.0);
            if ui.button(t("settings.close")).clicked() {
                close_clicked = true;
            }
        });
    if close_clicked {
        *open = false;
    }
}
