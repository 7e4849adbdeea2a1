//! Keyboard shortcut handling

use eframe::egui;

use crate::viewport::GlFrameSink;
use cake_gui_lib::session::CakeSession;

/// Enter: next step. Backspace: back (toppings only). Escape: reset.
pub fn handle_keyboard(ctx: &egui::Context, session: &mut CakeSession<GlFrameSink>) {
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (next, back, reset) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if next {
        session.next();
    }
    if back && session.wizard().offers_back() {
        session.back();
    }
    if reset {
        session.reset();
    }
}
