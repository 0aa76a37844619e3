//! Text style state and its resolution into paint parameters.

use craftfont_render::Color;

/// A color code: one hex digit, `0x0..=0xF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Code `f`, the untinted default.
    pub const WHITE: ColorCode = ColorCode(0xF);

    /// Parse a lowercase hex digit (`0-9`, `a-f`). Uppercase letters are not color codes.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | 'a'..='f' => c.to_digit(16).map(|d| ColorCode(d as u8)),
            _ => None,
        }
    }

    /// Build from a numeric value, `None` above 15.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 0xF).then_some(ColorCode(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from_digit(self.0 as u32, 16).unwrap_or('f')
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Style of one text run.
///
/// A plain value: every formatting code produces a new `StyleState` rather than mutating a
/// shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleState {
    pub color: ColorCode,
    /// Resolve colors from the dim shadow palette.
    pub shadow: bool,
    pub bold: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub italic: bool,
}

impl StyleState {
    /// Create the default style: color `f`, no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reset target of a formatted draw call: default style carrying only the shadow flag.
    pub fn baseline(shadow: bool) -> Self {
        Self {
            shadow,
            ..Self::default()
        }
    }

    pub fn with_color(self, color: ColorCode) -> Self {
        Self { color, ..self }
    }

    pub fn with_shadow(self, shadow: bool) -> Self {
        Self { shadow, ..self }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn strikethrough(self) -> Self {
        Self {
            strikethrough: true,
            ..self
        }
    }

    pub fn underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }

    pub fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    /// Resolve into concrete paint parameters.
    pub fn paint(&self) -> Paint {
        Paint {
            fill: resolve_fill(self),
            bold: self.bold,
            strikethrough: self.strikethrough,
            underline: self.underline,
            italic: self.italic,
        }
    }
}

/// Concrete parameters the glyph renderer needs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    /// Tint for the run, or `None` to keep the atlas' own white.
    pub fill: Option<Color>,
    pub bold: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub italic: bool,
}

/// Foreground palette indexed by color code. Code `f` is untinted: the atlas is authored white.
pub const BRIGHT_PALETTE: [Option<Color>; 16] = [
    Some(Color::from_hex(0x000000)),
    Some(Color::from_hex(0x0000AA)),
    Some(Color::from_hex(0x00AA00)),
    Some(Color::from_hex(0x00AAAA)),
    Some(Color::from_hex(0xAA0000)),
    Some(Color::from_hex(0xAA00AA)),
    Some(Color::from_hex(0xFFAA00)),
    Some(Color::from_hex(0xAAAAAA)),
    Some(Color::from_hex(0x555555)),
    Some(Color::from_hex(0x5555FF)),
    Some(Color::from_hex(0x55FF55)),
    Some(Color::from_hex(0x55FFFF)),
    Some(Color::from_hex(0xFF5555)),
    Some(Color::from_hex(0xFF55FF)),
    Some(Color::from_hex(0xFFFF55)),
    None,
];

/// Shadow palette indexed by color code.
pub const DIM_PALETTE: [Color; 16] = [
    Color::from_hex(0x000000),
    Color::from_hex(0x00002A),
    Color::from_hex(0x002A00),
    Color::from_hex(0x002A2A),
    Color::from_hex(0x2A0000),
    Color::from_hex(0x2A002A),
    Color::from_hex(0x2A2A00),
    Color::from_hex(0x2A2A2A),
    Color::from_hex(0x151515),
    Color::from_hex(0x15153F),
    Color::from_hex(0x153F15),
    Color::from_hex(0x153F3F),
    Color::from_hex(0x3F1515),
    Color::from_hex(0x3F153F),
    Color::from_hex(0x3F3F15),
    Color::from_hex(0x3F3F3F),
];

/// Fill color for a style, or `None` when no tint is needed.
pub fn resolve_fill(style: &StyleState) -> Option<Color> {
    let index = style.color.value() as usize;
    if style.shadow {
        Some(DIM_PALETTE[index])
    } else {
        BRIGHT_PALETTE[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_parsing() {
        assert_eq!(ColorCode::from_char('0').map(ColorCode::value), Some(0));
        assert_eq!(ColorCode::from_char('a').map(ColorCode::value), Some(10));
        assert_eq!(ColorCode::from_char('f').map(ColorCode::value), Some(15));
        assert_eq!(ColorCode::from_char('A'), None);
        assert_eq!(ColorCode::from_char('g'), None);
        assert_eq!(ColorCode::new(16), None);
        assert_eq!(ColorCode::new(9).map(ColorCode::as_char), Some('9'));
    }

    #[test]
    fn test_default_is_untinted() {
        let style = StyleState::default();
        assert_eq!(style.color, ColorCode::WHITE);
        assert_eq!(resolve_fill(&style), None);
    }

    #[test]
    fn test_shadow_white_is_dark_grey() {
        let style = StyleState::baseline(true);
        assert_eq!(resolve_fill(&style), Some(Color::from_hex(0x3F3F3F)));
    }

    #[test]
    fn test_bright_palette_lookup() {
        let style = StyleState::new().with_color(ColorCode::from_char('6').unwrap());
        assert_eq!(resolve_fill(&style), Some(Color::rgb(0xFF, 0xAA, 0x00)));
    }

    #[test]
    fn test_every_dim_entry_is_concrete() {
        for value in 0..16 {
            let style = StyleState::baseline(true).with_color(ColorCode::new(value).unwrap());
            assert!(resolve_fill(&style).is_some());
        }
    }

    #[test]
    fn test_builders_do_not_alias() {
        let base = StyleState::baseline(false);
        let bold = base.bold();

        assert!(!base.bold);
        assert!(bold.bold);
        assert!(bold.italic().bold);
    }

    #[test]
    fn test_paint_carries_flags() {
        let paint = StyleState::new().underline().strikethrough().paint();
        assert!(paint.underline);
        assert!(paint.strikethrough);
        assert!(!paint.bold);
        assert!(!paint.italic);
        assert_eq!(paint.fill, None);
    }
}
