//! A raster surface that records the primitives it receives.

use craftfont_core::geometry::{Rect, Size};
use craftfont_render::{Color, CompositeMode, LinearGradient, Pixmap, RasterSurface};

/// One primitive call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetCompositeMode(CompositeMode),
    FillRect {
        rect: Rect<i32>,
        color: Color,
    },
    FillGradient {
        rect: Rect<i32>,
        gradient: LinearGradient,
    },
    ClearRect(Rect<i32>),
    DrawPixmap {
        source_size: Size<u32>,
        src_rect: Rect<i32>,
        dest_rect: Rect<i32>,
    },
}

/// Records every call and forwards it to an inner [`Pixmap`], so tests can assert on both
/// the call sequence and the resulting pixels.
///
/// Methods take `&mut self` like any surface; no interior mutability is needed.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pixmap: Pixmap,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixmap: Pixmap::new(width, height),
            calls: Vec::new(),
        }
    }

    /// The rasterized result so far.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Clear recorded calls (useful between test steps). Pixels are kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Count solid fills.
    pub fn count_fill_rects(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::FillRect { .. }))
            .count()
    }

    /// Count gradient fills.
    pub fn count_gradient_fills(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::FillGradient { .. }))
            .count()
    }

    /// Count pixmap blits.
    pub fn count_blits(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::DrawPixmap { .. }))
            .count()
    }

    /// Source and destination rectangles of every blit, in order.
    pub fn blits(&self) -> Vec<(Rect<i32>, Rect<i32>)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::DrawPixmap {
                    src_rect,
                    dest_rect,
                    ..
                } => Some((*src_rect, *dest_rect)),
                _ => None,
            })
            .collect()
    }

    /// Rectangles and colors of every solid fill, in order.
    pub fn fills(&self) -> Vec<(Rect<i32>, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl RasterSurface for RecordingSurface {
    fn size(&self) -> Size<u32> {
        self.pixmap.size()
    }

    fn composite_mode(&self) -> CompositeMode {
        self.pixmap.composite_mode()
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.calls.push(SurfaceCall::SetCompositeMode(mode));
        self.pixmap.set_composite_mode(mode);
    }

    fn fill_rect(&mut self, rect: Rect<i32>, color: Color) {
        self.calls.push(SurfaceCall::FillRect { rect, color });
        self.pixmap.fill_rect(rect, color);
    }

    fn fill_rect_gradient(&mut self, rect: Rect<i32>, gradient: &LinearGradient) {
        self.calls.push(SurfaceCall::FillGradient {
            rect,
            gradient: *gradient,
        });
        self.pixmap.fill_rect_gradient(rect, gradient);
    }

    fn clear_rect(&mut self, rect: Rect<i32>) {
        self.calls.push(SurfaceCall::ClearRect(rect));
        self.pixmap.clear_rect(rect);
    }

    fn draw_pixmap(&mut self, source: &Pixmap, src_rect: Rect<i32>, dest_rect: Rect<i32>) {
        self.calls.push(SurfaceCall::DrawPixmap {
            source_size: source.size(),
            src_rect,
            dest_rect,
        });
        self.pixmap.draw_pixmap(source, src_rect, dest_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftfont_render::PaintScope;

    #[test]
    fn test_records_and_rasterizes() {
        let mut surface = RecordingSurface::new(4, 4);
        surface.fill_rect(Rect::new(0, 0, 4, 4), Color::BLUE);
        surface.clear_rect(Rect::new(0, 0, 1, 1));

        assert_eq!(surface.call_count(), 2);
        assert_eq!(surface.count_fill_rects(), 1);
        assert_eq!(surface.pixmap().pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(surface.pixmap().pixel(3, 3), Some(Color::BLUE));
    }

    #[test]
    fn test_paint_scope_is_recorded() {
        let mut surface = RecordingSurface::new(2, 2);
        {
            let _scope = PaintScope::new(&mut surface, CompositeMode::SourceIn);
        }
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::SetCompositeMode(CompositeMode::SourceIn),
                SurfaceCall::SetCompositeMode(CompositeMode::SourceOver),
            ]
        );
    }

    #[test]
    fn test_blit_records_rects() {
        let mut surface = RecordingSurface::new(8, 8);
        let source = Pixmap::new(2, 2);
        surface.draw_pixmap_at(&source, 3, 4);

        assert_eq!(
            surface.blits(),
            vec![(Rect::new(0, 0, 2, 2), Rect::new(3, 4, 2, 2))]
        );
        surface.clear_calls();
        assert_eq!(surface.call_count(), 0);
    }
}
