//! Bottom prompt card: step label, per-step options, navigation.

use egui::{Color32, Stroke, Ui};
use shared::{CakeShape, HeightInches, HexColor, Topping, BASE_COLORS, FILLING_COLORS};

use crate::i18n::t;
use crate::state::Step;
use crate::viewport::GlFrameSink;
use cake_gui_lib::session::CakeSession;

const SWATCH: f32 = 30.0;

pub fn show(ui: &mut Ui, session: &mut CakeSession<GlFrameSink>) {
    let wizard = *session.wizard();
    let step = wizard.step();

    ui.horizontal(|ui| {
        ui.weak(format!(
            "{} {} {} {}",
            t("step.step"),
            step.number(),
            t("step.of"),
            wizard.step_count()
        ));
        ui.separator();
        ui.strong(t(step.title_key()));
    });
    ui.add_space(6.0);

    match step {
        Step::Base => shape_options(ui, session),
        Step::Height => height_options(ui, session),
        Step::Color => {
            let current = session.selection().base_color;
            if let Some(color) = swatch_row(ui, &BASE_COLORS, Some(current)) {
                session.pick_base_color(color);
            }
        }
        Step::Filling => {
            let current = session.selection().filling_color;
            if let Some(color) = swatch_row(ui, &FILLING_COLORS, current) {
                if !session.pick_filling(color) {
                    tracing::debug!("Filling not applied");
                }
            }
            if session.selection().shape.is_none() {
                ui.weak(t("hint.filling_needs_base"));
            }
        }
        Step::Toppings => topping_chips(ui, session),
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if wizard.offers_back() && ui.button(t("btn.back")).clicked() {
            session.back();
        }
        let next_label = if wizard.is_last() {
            t("btn.done")
        } else {
            t("btn.next")
        };
        let can_advance = wizard.can_advance(session.selection());
        if ui
            .add_enabled(can_advance, egui::Button::new(next_label))
            .clicked()
        {
            session.next();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(t("btn.reset")).clicked() {
                session.reset();
            }
            if session.selection().shape.is_some()
                && ui
                    .selectable_label(session.preview_open(), t("btn.preview"))
                    .clicked()
            {
                session.toggle_preview();
            }
        });
    });
}

fn shape_key(shape: CakeShape) -> &'static str {
    match shape {
        CakeShape::Circle => "shape.circle",
        CakeShape::Square => "shape.square",
        CakeShape::Heart => "shape.heart",
        CakeShape::Triangle => "shape.triangle",
    }
}

fn shape_options(ui: &mut Ui, session: &mut CakeSession<GlFrameSink>) {
    let current = session.selection().shape;
    ui.horizontal_wrapped(|ui| {
        for shape in CakeShape::OFFERED {
            if ui
                .selectable_label(current == Some(shape), t(shape_key(shape)))
                .clicked()
            {
                session.select_shape(shape);
            }
        }
    });
}

fn height_options(ui: &mut Ui, session: &mut CakeSession<GlFrameSink>) {
    let current = session.selection().height;
    ui.horizontal_wrapped(|ui| {
        for height in HeightInches::all() {
            let label = format!("{}\"", height.inches());
            if ui
                .selectable_label(current == Some(height), label)
                .clicked()
            {
                session.select_height(height);
            }
        }
    });
}

fn to_color32(color: HexColor) -> Color32 {
    let [r, g, b] = color.rgb8();
    Color32::from_rgb(r, g, b)
}

/// Row of color swatches; returns the clicked color
fn swatch_row(ui: &mut Ui, palette: &[HexColor], selected: Option<HexColor>) -> Option<HexColor> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for &color in palette {
            let stroke = if selected == Some(color) {
                Stroke::new(2.5, ui.visuals().selection.stroke.color)
            } else {
                Stroke::new(1.0, Color32::from_gray(90))
            };
            let button = egui::Button::new("")
                .fill(to_color32(color))
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same((SWATCH / 2.0) as u8))
                .min_size(egui::vec2(SWATCH, SWATCH));
            if ui.add(button).on_hover_text(color.to_hex()).clicked() {
                clicked = Some(color);
            }
        }
    });
    clicked
}

fn topping_chips(ui: &mut Ui, session: &mut CakeSession<GlFrameSink>) {
    let mut toggled = None;
    ui.horizontal_wrapped(|ui| {
        for topping in Topping::ALL {
            let tag = topping.tag();
            let on = session.selection().toppings.contains(tag);
            if ui.selectable_label(on, tag).clicked() {
                toggled = Some(tag);
            }
        }
    });
    if let Some(tag) = toggled {
        session.toggle_topping(tag);
    }
}
