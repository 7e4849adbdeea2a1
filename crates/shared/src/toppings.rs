//! Каталог топпингов и список выбранных топпингов

use serde::{Deserialize, Serialize};

use crate::HexColor;

/// Максимальное число одновременно выбранных топпингов
pub const MAX_TOPPINGS: usize = 2;

/// Способ раскладки топпинга на верхней грани
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToppingPattern {
    /// Тонкие палочки со случайной ориентацией
    Sprinkles,
    /// Маленькие шарики, рассыпанные по кругу
    Nuts,
    /// Кольцо из крупных шариков по краю
    CreamRing,
}

/// Именованный топпинг из каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    Sprinkles,
    RainbowSprinkles,
    Peanuts,
    Almonds,
    ChocoChips,
    Cream,
    WhippedCream,
    Berries,
    Cherry,
    Gummy,
    CaramelBits,
    SugarPearls,
    GoldLeaf,
    CookieCrumbs,
    Oreo,
}

const fn rgb(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(r, g, b)
}

type Layer = (ToppingPattern, HexColor);

const fn single(pattern: ToppingPattern, color: HexColor) -> [Layer; 1] {
    [(pattern, color)]
}

const PINK_SPRINKLES: [Layer; 1] = single(ToppingPattern::Sprinkles, rgb(0xFF, 0x69, 0xB4));
const PEANUTS: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0xC4, 0xA4, 0x84));
const ALMONDS: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0xE6, 0xC9, 0xA8));
const CHOCO_CHIPS: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0x5B, 0x3A, 0x29));
const CREAM: [Layer; 1] = single(ToppingPattern::CreamRing, rgb(0xFF, 0xFF, 0xFF));
const WHIPPED_CREAM: [Layer; 1] = single(ToppingPattern::CreamRing, rgb(0xF8, 0xFA, 0xFC));
const CHERRY: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0xFF, 0x1F, 0x1F));
const GUMMY: [Layer; 1] = single(ToppingPattern::Sprinkles, rgb(0x22, 0xD3, 0xEE));
const CARAMEL_BITS: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0xB4, 0x53, 0x09));
const SUGAR_PEARLS: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0xE5, 0xE7, 0xEB));
const GOLD_LEAF: [Layer; 1] = single(ToppingPattern::Nuts, rgb(0xD4, 0xAF, 0x37));
const COOKIE_CRUMBS: [Layer; 1] = single(ToppingPattern::Sprinkles, rgb(0x6B, 0x72, 0x80));
const OREO: [Layer; 1] = single(ToppingPattern::Sprinkles, rgb(0x11, 0x18, 0x27));

const RAINBOW: [Layer; 5] = [
    (ToppingPattern::Sprinkles, rgb(0xEF, 0x44, 0x44)),
    (ToppingPattern::Sprinkles, rgb(0xF5, 0x9E, 0x0B)),
    (ToppingPattern::Sprinkles, rgb(0x10, 0xB9, 0x81)),
    (ToppingPattern::Sprinkles, rgb(0x3B, 0x82, 0xF6)),
    (ToppingPattern::Sprinkles, rgb(0xA8, 0x55, 0xF7)),
];

const BERRIES: [Layer; 2] = [
    (ToppingPattern::Nuts, rgb(0xDC, 0x26, 0x26)),
    (ToppingPattern::Nuts, rgb(0x7C, 0x3A, 0xED)),
];

impl Topping {
    /// Все топпинги в порядке отображения
    pub const ALL: [Topping; 15] = [
        Topping::Sprinkles,
        Topping::RainbowSprinkles,
        Topping::Peanuts,
        Topping::Almonds,
        Topping::ChocoChips,
        Topping::Cream,
        Topping::WhippedCream,
        Topping::Berries,
        Topping::Cherry,
        Topping::Gummy,
        Topping::CaramelBits,
        Topping::SugarPearls,
        Topping::GoldLeaf,
        Topping::CookieCrumbs,
        Topping::Oreo,
    ];

    /// Отображаемое имя (оно же тег в списке выбора)
    pub fn tag(&self) -> &'static str {
        match self {
            Topping::Sprinkles => "Sprinkles",
            Topping::RainbowSprinkles => "Rainbow Sprinkles",
            Topping::Peanuts => "Peanuts",
            Topping::Almonds => "Almonds",
            Topping::ChocoChips => "Choco Chips",
            Topping::Cream => "Cream",
            Topping::WhippedCream => "Whipped Cream",
            Topping::Berries => "Berries",
            Topping::Cherry => "Cherry",
            Topping::Gummy => "Gummy",
            Topping::CaramelBits => "Caramel Bits",
            Topping::SugarPearls => "Sugar Pearls",
            Topping::GoldLeaf => "Gold Leaf",
            Topping::CookieCrumbs => "Cookie Crumbs",
            Topping::Oreo => "Oreo",
        }
    }

    /// Поиск по тегу; неизвестные теги дают None
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Проходы генератора: (раскладка, цвет) для каждого вызова
    pub fn layers(&self) -> &'static [(ToppingPattern, HexColor)] {
        match self {
            Topping::Sprinkles => &PINK_SPRINKLES,
            Topping::RainbowSprinkles => &RAINBOW,
            Topping::Peanuts => &PEANUTS,
            Topping::Almonds => &ALMONDS,
            Topping::ChocoChips => &CHOCO_CHIPS,
            Topping::Cream => &CREAM,
            Topping::WhippedCream => &WHIPPED_CREAM,
            Topping::Berries => &BERRIES,
            Topping::Cherry => &CHERRY,
            Topping::Gummy => &GUMMY,
            Topping::CaramelBits => &CARAMEL_BITS,
            Topping::SugarPearls => &SUGAR_PEARLS,
            Topping::GoldLeaf => &GOLD_LEAF,
            Topping::CookieCrumbs => &COOKIE_CRUMBS,
            Topping::Oreo => &OREO,
        }
    }
}

/// Упорядоченный список тегов, не длиннее MAX_TOPPINGS.
/// При добавлении третьего самый старый вытесняется.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ToppingList(Vec<String>);

impl ToppingList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Добавить тег; при переполнении вытесняется самый старый
    pub fn push(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if self.contains(&tag) {
            return;
        }
        if self.0.len() >= MAX_TOPPINGS {
            self.0.remove(0);
        }
        self.0.push(tag);
    }

    /// Переключить тег: убрать, если выбран, иначе добавить
    pub fn toggle(&mut self, tag: &str) {
        if self.contains(tag) {
            self.0.retain(|t| t != tag);
        } else {
            self.push(tag);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<String>> for ToppingList {
    fn from(tags: Vec<String>) -> Self {
        let mut list = ToppingList::default();
        for tag in tags {
            list.push(tag);
        }
        list
    }
}

impl From<ToppingList> for Vec<String> {
    fn from(list: ToppingList) -> Vec<String> {
        list.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_topping_evicts_oldest() {
        let mut list = ToppingList::default();
        list.push("Sprinkles");
        list.push("Peanuts");
        list.push("Cream");
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), ["Peanuts".to_string(), "Cream".to_string()]);
    }

    #[test]
    fn test_toggle_removes_selected() {
        let mut list = ToppingList::default();
        list.toggle("Sprinkles");
        list.toggle("Peanuts");
        list.toggle("Sprinkles");
        assert_eq!(list.as_slice(), ["Peanuts".to_string()]);
    }

    #[test]
    fn test_toggle_on_full_list_replaces_first() {
        let mut list = ToppingList::default();
        list.toggle("Sprinkles");
        list.toggle("Peanuts");
        list.toggle("Oreo");
        assert_eq!(list.as_slice(), ["Peanuts".to_string(), "Oreo".to_string()]);
    }

    #[test]
    fn test_deserialize_caps_length() {
        let list: ToppingList = serde_json::from_str(r#"["A","B","C"]"#).unwrap();
        assert_eq!(list.as_slice(), ["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_catalog_tags_roundtrip() {
        for t in Topping::ALL {
            assert_eq!(Topping::from_tag(t.tag()), Some(t));
            assert!(!t.layers().is_empty());
        }
        assert_eq!(Topping::from_tag("Marzipan"), None);
    }

    #[test]
    fn test_multi_pass_toppings() {
        assert_eq!(Topping::RainbowSprinkles.layers().len(), 5);
        assert_eq!(Topping::Berries.layers().len(), 2);
        assert!(Topping::RainbowSprinkles
            .layers()
            .iter()
            .all(|(p, _)| *p == ToppingPattern::Sprinkles));
    }
}
