use tiny_skia::{ColorU8, PremultipliedColorU8};

/// An RGBA color with 8-bit straight (non-premultiplied) components.
///
/// Colors can be constructed from components or hex codes:
///
/// ```
/// use craftfont_render::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// let from_hex = Color::from_hex(0xFFAA00);
/// let translucent = Color::from_hex_alpha(0x5000FF50);
/// assert_eq!(from_hex.g, 0xAA);
/// assert_eq!(translucent.a, 0x50);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`, so a row of colors can be
/// viewed as raw RGBA bytes without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Create a color from a 32-bit RGBA hex value (e.g. `0xFF880080`).
    pub const fn from_hex_alpha(hex: u32) -> Self {
        Self::rgba(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// The premultiplied form stored by [`Pixmap`](crate::Pixmap).
    pub fn premultiply(self) -> PremultipliedColorU8 {
        ColorU8::from_rgba(self.r, self.g, self.b, self.a).premultiply()
    }

    /// Convert to an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        Self::from(px.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_array())
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<PremultipliedColorU8> for Color {
    fn from(px: PremultipliedColorU8) -> Self {
        let px = px.demultiply();
        Self::rgba(px.red(), px.green(), px.blue(), px.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0x00AA00), Color::rgb(0, 0xAA, 0));
        assert_eq!(Color::from_hex(0x3F3F3F), Color::rgb(63, 63, 63));
    }

    #[test]
    fn test_from_hex_alpha() {
        assert_eq!(Color::from_hex_alpha(0x100010F0), Color::rgba(16, 0, 16, 240));
    }

    #[test]
    fn test_premultiplied_round_trip() {
        let opaque = Color::from_hex(0x3F3F15);
        assert_eq!(Color::from(opaque.premultiply()), opaque);
        assert_eq!(Color::from(Color::TRANSPARENT.premultiply()), Color::TRANSPARENT);
    }

    #[test]
    fn test_pod_cast() {
        let px = [Color::RED, Color::BLUE];
        let bytes: &[u8] = bytemuck::cast_slice(&px);
        assert_eq!(bytes, &[255, 0, 0, 255, 0, 0, 255, 255]);
    }
}
