use serde::{Deserialize, Serialize};

mod toppings;

pub use toppings::{Topping, ToppingList, ToppingPattern, MAX_TOPPINGS};

/// Форма основания торта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CakeShape {
    Circle,
    Square,
    Heart,
    Triangle,
}

impl CakeShape {
    /// Формы, которые мастер предлагает пользователю
    pub const OFFERED: [CakeShape; 1] = [CakeShape::Circle];

    pub fn name(&self) -> &'static str {
        match self {
            CakeShape::Circle => "circle",
            CakeShape::Square => "square",
            CakeShape::Heart => "heart",
            CakeShape::Triangle => "triangle",
        }
    }
}

/// Высота торта в дюймах: только 3, 6, 8, 9 или 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeightInches(u8);

impl HeightInches {
    /// Допустимые значения
    pub const ALLOWED: [u8; 5] = [3, 6, 8, 9, 12];
    /// Высота, соответствующая масштабу 1.0
    pub const BASELINE: u8 = 6;

    pub fn new(inches: u8) -> Result<Self, String> {
        if Self::ALLOWED.contains(&inches) {
            Ok(Self(inches))
        } else {
            Err(format!(
                "unsupported cake height {inches}\" (expected one of {:?})",
                Self::ALLOWED
            ))
        }
    }

    pub fn inches(&self) -> u8 {
        self.0
    }

    /// Множитель вертикального масштаба: inches / 6
    pub fn scale_factor(&self) -> f32 {
        self.0 as f32 / Self::BASELINE as f32
    }

    pub fn all() -> impl Iterator<Item = HeightInches> {
        Self::ALLOWED.into_iter().map(HeightInches)
    }
}

impl TryFrom<u8> for HeightInches {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HeightInches> for u8 {
    fn from(h: HeightInches) -> u8 {
        h.0
    }
}

/// Цвет в формате "#RRGGBB"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const WHITE: HexColor = HexColor([0xFF, 0xFF, 0xFF]);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Разбор строки "#RRGGBB" (решётка необязательна)
    pub fn parse(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{s}': expected #RRGGBB"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid color '{s}': {e}"))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn rgb8(&self) -> [u8; 3] {
        self.0
    }

    /// Каналы в диапазоне 0..=1
    pub fn to_rgb(&self) -> [f32; 3] {
        [
            self.0[0] as f32 / 255.0,
            self.0[1] as f32 / 255.0,
            self.0[2] as f32 / 255.0,
        ]
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> String {
        c.to_hex()
    }
}

/// Цвет основания по умолчанию
pub const DEFAULT_BASE_COLOR: HexColor = HexColor::from_rgb(0xE8, 0xD2, 0xA6);

/// Палитра цветов основания (шаг 3)
pub const BASE_COLORS: [HexColor; 7] = [
    HexColor::from_rgb(0xE8, 0xD2, 0xA6),
    HexColor::from_rgb(0xE1, 0xBE, 0xE7),
    HexColor::from_rgb(0xF8, 0x71, 0x71),
    HexColor::from_rgb(0xFB, 0xBF, 0x24),
    HexColor::from_rgb(0x34, 0xD3, 0x99),
    HexColor::from_rgb(0x60, 0xA5, 0xFA),
    HexColor::from_rgb(0xFF, 0xFF, 0xFF),
];

/// Палитра начинок (шаг 4)
pub const FILLING_COLORS: [HexColor; 6] = [
    HexColor::from_rgb(0x7D, 0xD3, 0xFC),
    HexColor::from_rgb(0xFD, 0xA4, 0xAF),
    HexColor::from_rgb(0xFD, 0xE0, 0x47),
    HexColor::from_rgb(0x86, 0xEF, 0xAC),
    HexColor::from_rgb(0xA7, 0x8B, 0xFA),
    HexColor::from_rgb(0xFF, 0xFF, 0xFF),
];

fn default_base_color() -> HexColor {
    DEFAULT_BASE_COLOR
}

/// Текущий выбор пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub shape: Option<CakeShape>,
    #[serde(default)]
    pub height: Option<HeightInches>,
    #[serde(default = "default_base_color")]
    pub base_color: HexColor,
    #[serde(default)]
    pub filling_color: Option<HexColor>,
    #[serde(default)]
    pub toppings: ToppingList,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            shape: None,
            height: None,
            base_color: DEFAULT_BASE_COLOR,
            filling_color: None,
            toppings: ToppingList::default(),
        }
    }
}

impl Selection {
    /// Вертикальный множитель для текущей высоты (1.0, если высота не выбрана)
    pub fn height_factor(&self) -> f32 {
        self.height.map(|h| h.scale_factor()).unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_rejects_unsupported() {
        assert!(HeightInches::new(7).is_err());
        assert!(HeightInches::new(0).is_err());
        for h in HeightInches::ALLOWED {
            assert!(HeightInches::new(h).is_ok());
        }
    }

    #[test]
    fn test_height_scale_factor() {
        assert_eq!(HeightInches::new(6).unwrap().scale_factor(), 1.0);
        assert_eq!(HeightInches::new(9).unwrap().scale_factor(), 1.5);
        assert_eq!(HeightInches::new(3).unwrap().scale_factor(), 0.5);
        assert_eq!(HeightInches::new(12).unwrap().scale_factor(), 2.0);
    }

    #[test]
    fn test_height_serde_validates() {
        let h: HeightInches = serde_json::from_str("8").unwrap();
        assert_eq!(h.inches(), 8);
        assert!(serde_json::from_str::<HeightInches>("5").is_err());
    }

    #[test]
    fn test_hex_color_parse() {
        let c = HexColor::parse("#FFFFFF").unwrap();
        assert_eq!(c, HexColor::WHITE);
        assert_eq!(c.to_rgb(), [1.0, 1.0, 1.0]);

        let c = HexColor::parse("e8d2a6").unwrap();
        assert_eq!(c, DEFAULT_BASE_COLOR);
        assert_eq!(c.to_hex(), "#E8D2A6");
    }

    #[test]
    fn test_hex_color_parse_errors() {
        assert!(HexColor::parse("#FFF").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
        assert!(HexColor::parse("").is_err());
        // from_str_radix alone would accept a sign
        assert!(HexColor::parse("#+F+F+F").is_err());
        assert!(HexColor::parse("#-1-1-1").is_err());
    }

    #[test]
    fn test_selection_defaults_from_empty_json() {
        let s: Selection = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Selection::default());
        assert_eq!(s.base_color, DEFAULT_BASE_COLOR);
        assert_eq!(s.height_factor(), 1.0);
    }

    #[test]
    fn test_selection_json_shape() {
        let json = r##"{"shape":"circle","height":9,"base_color":"#FFFFFF","toppings":["Cream"]}"##;
        let s: Selection = serde_json::from_str(json).unwrap();
        assert_eq!(s.shape, Some(CakeShape::Circle));
        assert_eq!(s.height_factor(), 1.5);
        assert_eq!(s.base_color, HexColor::WHITE);
        assert_eq!(s.toppings.as_slice(), ["Cream".to_string()]);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(CakeShape::Heart.name(), "heart");
        let shape: CakeShape = serde_json::from_str(r#""triangle""#).unwrap();
        assert_eq!(shape, CakeShape::Triangle);
        assert!(serde_json::from_str::<CakeShape>(r#""hexagon""#).is_err());
    }
}
