//! The abstract destination surface.
//!
//! Any raster target offering these primitives can receive craftfont output. Methods take
//! `&mut self`; a surface is owned by one renderer call at a time.

use craftfont_core::geometry::{Rect, Size};

use crate::{Color, CompositeMode, LinearGradient, Pixmap};

/// A 2D raster target.
///
/// All rectangles are in surface pixels and are clipped to the surface bounds. Every drawing
/// primitive except [`clear_rect`](RasterSurface::clear_rect) honours the current
/// [`CompositeMode`].
pub trait RasterSurface {
    /// Surface dimensions in pixels.
    fn size(&self) -> Size<u32>;

    /// The composite mode applied by subsequent drawing calls.
    fn composite_mode(&self) -> CompositeMode;

    /// Change the composite mode. Prefer [`PaintScope`], which restores the previous mode.
    fn set_composite_mode(&mut self, mode: CompositeMode);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect<i32>, color: Color);

    /// Fill a rectangle with a linear gradient evaluated in surface coordinates.
    fn fill_rect_gradient(&mut self, rect: Rect<i32>, gradient: &LinearGradient);

    /// Reset a rectangle to fully transparent, ignoring the composite mode.
    fn clear_rect(&mut self, rect: Rect<i32>);

    /// Copy `src_rect` of `source` into `dest_rect`, scaling with nearest-neighbour sampling
    /// when the two sizes differ. `src_rect` is expected to lie within `source`.
    fn draw_pixmap(&mut self, source: &Pixmap, src_rect: Rect<i32>, dest_rect: Rect<i32>);

    /// Copy the whole of `source` unscaled with its top-left corner at `(x, y)`.
    fn draw_pixmap_at(&mut self, source: &Pixmap, x: i32, y: i32) {
        let rect = Rect::from_origin_size(Default::default(), source.size());
        self.draw_pixmap(source, rect, rect.translate(x, y));
    }

    /// Clear the entire surface.
    fn clear(&mut self) {
        let rect = Rect::from_origin_size(Default::default(), self.size());
        self.clear_rect(rect);
    }
}

/// Scoped acquisition of a surface's composite mode.
///
/// The previous mode is restored when the scope is dropped, on every exit path. While the
/// scope lives it only forwards the drawing primitives, so the mode cannot be changed from
/// inside it.
///
/// ```
/// use craftfont_render::{Color, CompositeMode, PaintScope, Pixmap, RasterSurface};
/// use craftfont_core::geometry::Rect;
///
/// let mut pixmap = Pixmap::new(4, 4);
/// {
///     let mut scope = PaintScope::new(&mut pixmap, CompositeMode::SourceIn);
///     scope.fill_rect(Rect::new(0, 0, 4, 4), Color::RED);
/// }
/// assert_eq!(pixmap.composite_mode(), CompositeMode::SourceOver);
/// ```
pub struct PaintScope<'a, S: RasterSurface + ?Sized> {
    surface: &'a mut S,
    previous: CompositeMode,
}

impl<'a, S: RasterSurface + ?Sized> PaintScope<'a, S> {
    pub fn new(surface: &'a mut S, mode: CompositeMode) -> Self {
        let previous = surface.composite_mode();
        surface.set_composite_mode(mode);
        Self { surface, previous }
    }

    /// The mode that will be restored on drop.
    pub fn previous_mode(&self) -> CompositeMode {
        self.previous
    }

    /// The mode in effect inside the scope.
    pub fn mode(&self) -> CompositeMode {
        self.surface.composite_mode()
    }

    pub fn size(&self) -> Size<u32> {
        self.surface.size()
    }

    pub fn fill_rect(&mut self, rect: Rect<i32>, color: Color) {
        self.surface.fill_rect(rect, color);
    }

    pub fn fill_rect_gradient(&mut self, rect: Rect<i32>, gradient: &LinearGradient) {
        self.surface.fill_rect_gradient(rect, gradient);
    }

    pub fn clear_rect(&mut self, rect: Rect<i32>) {
        self.surface.clear_rect(rect);
    }

    pub fn draw_pixmap(&mut self, source: &Pixmap, src_rect: Rect<i32>, dest_rect: Rect<i32>) {
        self.surface.draw_pixmap(source, src_rect, dest_rect);
    }

    pub fn draw_pixmap_at(&mut self, source: &Pixmap, x: i32, y: i32) {
        self.surface.draw_pixmap_at(source, x, y);
    }
}

impl<S: RasterSurface + ?Sized> Drop for PaintScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_composite_mode(self.previous);
    }
}
