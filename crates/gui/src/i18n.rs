use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    #[default]
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Wizard steps ────────────────────────────────────
        "step.base" => if ru { "Выберите форму" } else { "Choose a shape" },
        "step.height" => if ru { "Выберите высоту" } else { "Choose a height" },
        "step.color" => if ru { "Цвет основы" } else { "Base color" },
        "step.filling" => if ru { "Начинка" } else { "Filling" },
        "step.toppings" => if ru { "Топпинги (до 2)" } else { "Toppings (up to 2)" },
        "step.of" => if ru { "из" } else { "of" },
        "step.step" => if ru { "Шаг" } else { "Step" },

        // ── Shapes ──────────────────────────────────────────
        "shape.circle" => if ru { "Круг" } else { "Circle" },
        "shape.square" => if ru { "Квадрат" } else { "Square" },
        "shape.heart" => if ru { "Сердце" } else { "Heart" },
        "shape.triangle" => if ru { "Треугольник" } else { "Triangle" },

        // ── Buttons ─────────────────────────────────────────
        "btn.next" => if ru { "Далее" } else { "Next" },
        "btn.back" => if ru { "Назад" } else { "Back" },
        "btn.reset" => if ru { "Сбросить" } else { "Reset" },
        "btn.done" => if ru { "Готово" } else { "Done" },
        "btn.preview" => if ru { "Витрина" } else { "Showcase" },

        // ── Camera ──────────────────────────────────────────
        "camera.requesting" => if ru { "Запрос доступа к камере..." } else { "Requesting camera access..." },
        "camera.warming" => if ru { "Запуск камеры..." } else { "Starting camera..." },
        "camera.denied_title" => if ru { "Нет доступа к камере" } else { "Camera access denied" },
        "camera.denied_body" => if ru {
            "Разрешите доступ к камере в настройках системы, чтобы увидеть торт в AR."
        } else {
            "Allow camera access in system settings to see your cake in AR."
        },

        // ── Hints ───────────────────────────────────────────
        "hint.drag" => if ru { "Перетащите, чтобы повернуть торт" } else { "Drag to rotate the cake" },
        "hint.filling_needs_base" => if ru { "Сначала выберите форму" } else { "Choose a shape first" },

        // ── Settings ────────────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.variant" => if ru { "Мастер" } else { "Wizard" },
        "settings.color_mode" => if ru { "Смена цвета" } else { "Color change" },
        "settings.language" => if ru { "Язык" } else { "Language" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.restart_hint" => if ru {
            "Изменения мастера применятся после перезапуска"
        } else {
            "Wizard changes apply after restart"
        },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
