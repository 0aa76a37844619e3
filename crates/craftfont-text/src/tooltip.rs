//! Tooltip boxes in the style of inventory item tooltips.
//!
//! Geometry for a single line, with `s` the scale, `w` the text width and `h` the text height
//! minus one unit:
//!
//! ```text
//!  s           w+6s          s
//! +-+-----------------------+-+
//! | |        top bar        | |  s
//! +-+-----------------------+-+
//! |#| accent                |#|  s
//! |#|g   text at (3s, 4s)  g|#|
//! |#| accent                |#|  s
//! +-+-----------------------+-+
//! | |      bottom bar       | |  s
//! +-+-----------------------+-+
//! ```
//!
//! The box is `w + 8s` wide and `h + 8s` tall.

use craftfont_core::geometry::{Pos, Rect, Size};
use craftfont_core::profiling::profile_function;
use craftfont_render::{Color, LinearGradient, RasterSurface};

use crate::error::TextResult;
use crate::renderer::FontRenderer;

pub const BACKGROUND: Color = Color::rgba(16, 0, 16, 240);
pub const BORDER_LIGHT: Color = Color::rgba(80, 0, 255, 80);
pub const BORDER_DARK: Color = Color::rgba(40, 0, 127, 80);

/// What a tooltip needs from a font renderer.
pub trait TooltipFont {
    fn scale(&self) -> u32;

    fn set_scale(&mut self, scale: u32) -> TextResult<()>;

    /// Width of formatted `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Height of `text` in pixels.
    fn text_height(&self, text: &str) -> u32;

    /// Fail with the reason drawing is impossible, if it is.
    fn ensure_ready(&self) -> TextResult<()>;

    /// Draw formatted `text` with a drop shadow.
    fn draw_shadowed<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
    ) -> TextResult<()>;
}

impl TooltipFont for FontRenderer {
    fn scale(&self) -> u32 {
        FontRenderer::scale(self)
    }

    fn set_scale(&mut self, scale: u32) -> TextResult<()> {
        FontRenderer::set_scale(self, scale)
    }

    fn text_width(&self, text: &str) -> u32 {
        FontRenderer::text_width(self, text)
    }

    fn text_height(&self, text: &str) -> u32 {
        FontRenderer::text_height(self, text)
    }

    fn ensure_ready(&self) -> TextResult<()> {
        self.check_ready()
    }

    fn draw_shadowed<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
    ) -> TextResult<()> {
        self.draw_formatted_with_shadow(surface, text, x, y)
    }
}

/// Paints a bordered, gradient-edged box and shadowed text inside it.
pub struct TooltipRenderer<F: TooltipFont = FontRenderer> {
    font: F,
}

impl<F: TooltipFont> TooltipRenderer<F> {
    pub fn new(font: F) -> Self {
        Self { font }
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut F {
        &mut self.font
    }

    pub fn into_font(self) -> F {
        self.font
    }

    pub fn scale(&self) -> u32 {
        self.font.scale()
    }

    /// Sets the scale of the tooltip and of its font renderer.
    pub fn set_scale(&mut self, scale: u32) -> TextResult<()> {
        self.font.set_scale(scale)
    }

    /// Full size of the box drawn for `text`, border included.
    pub fn tooltip_size(&self, text: &str) -> Size<u32> {
        let s = self.scale();
        let (w, h) = self.content_size(text);
        Size::new(w.saturating_add(8 * s), h.saturating_add(8 * s))
    }

    fn content_size(&self, text: &str) -> (u32, u32) {
        let s = self.scale();
        let width = self.font.text_width(text);
        // One unit of the line height is the cell's padding row.
        let height = self.font.text_height(text).saturating_sub(s);
        (width, height)
    }

    /// Draw the tooltip for single-line `text` with its top-left corner at `(x, y)`.
    ///
    /// Nothing is painted when the font cannot draw.
    pub fn render_tooltip<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
    ) -> TextResult<()> {
        profile_function!();
        self.font.ensure_ready()?;

        let s = self.scale() as i32;
        let (w, h) = self.content_size(text);
        let w = i32::try_from(w).unwrap_or(i32::MAX);
        let h = i32::try_from(h).unwrap_or(i32::MAX);
        // Box-relative offsets; origins near the ends of i32 clip instead of wrapping.
        let at = |rx: i32, ry: i32, rw: i32, rh: i32| {
            Rect::new(x.saturating_add(rx), y.saturating_add(ry), rw, rh)
        };
        let inner_w = w.saturating_add(6 * s);
        let inner_h = h.saturating_add(6 * s);
        tracing::trace!("Tooltip {:?} at ({}, {}), content {}x{}", text, x, y, w, h);

        surface.fill_rect(at(s, 0, inner_w, s), BACKGROUND);
        surface.fill_rect(at(s, h.saturating_add(7 * s), inner_w, s), BACKGROUND);
        surface.fill_rect(at(s, s, inner_w, inner_h), BACKGROUND);
        surface.fill_rect(at(0, s, s, inner_h), BACKGROUND);
        surface.fill_rect(at(w.saturating_add(7 * s), s, s, inner_h), BACKGROUND);

        let gradient = LinearGradient::new(
            Pos::new(x, y.saturating_add(2 * s)),
            Pos::new(x, y.saturating_add(inner_h)),
            BORDER_LIGHT,
            BORDER_DARK,
        );
        let bar_h = h.saturating_add(4 * s);
        surface.fill_rect_gradient(at(s, 2 * s, s, bar_h), &gradient);
        surface.fill_rect_gradient(at(inner_w, 2 * s, s, bar_h), &gradient);

        surface.fill_rect(at(s, s, inner_w, s), BORDER_LIGHT);
        surface.fill_rect(at(s, inner_h, inner_w, s), BORDER_DARK);

        let (text_x, text_y) = (x.saturating_add(3 * s), y.saturating_add(4 * s));
        self.font.draw_shadowed(surface, text, text_x, text_y)
    }
}
