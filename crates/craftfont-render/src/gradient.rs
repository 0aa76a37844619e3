//! Two-stop linear gradients.

use craftfont_core::geometry::Pos;
use tiny_skia::{GradientStop, Point, Shader, SpreadMode, Transform};

use crate::Color;

/// A linear gradient between two points with one color stop at each end.
///
/// Colors are sampled at pixel centers and clamp beyond either end point, so the gradient
/// can be defined in surface coordinates independently of the rectangle it fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: Pos<i32>,
    pub end: Pos<i32>,
    pub start_color: Color,
    pub end_color: Color,
}

impl LinearGradient {
    pub fn new(start: Pos<i32>, end: Pos<i32>, start_color: Color, end_color: Color) -> Self {
        Self {
            start,
            end,
            start_color,
            end_color,
        }
    }

    /// A top-to-bottom gradient from `y0` to `y1`.
    pub fn vertical(y0: i32, y1: i32, start_color: Color, end_color: Color) -> Self {
        Self::new(Pos::new(0, y0), Pos::new(0, y1), start_color, end_color)
    }

    /// The tiny-skia shader for this gradient in surface coordinates.
    ///
    /// A gradient whose end points coincide shades with `end_color`.
    pub fn shader(&self) -> Shader<'static> {
        let stops = vec![
            GradientStop::new(0.0, self.start_color.into()),
            GradientStop::new(1.0, self.end_color.into()),
        ];
        tiny_skia::LinearGradient::new(
            point(self.start),
            point(self.end),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        )
        .unwrap_or_else(|| Shader::SolidColor(self.end_color.into()))
    }
}

fn point(pos: Pos<i32>) -> Point {
    Point::from_xy(pos.x as f32, pos.y as f32)
}

#[cfg(test)]
mod tests {
    use craftfont_core::geometry::Rect;

    use super::*;
    use crate::{Pixmap, RasterSurface};

    fn shade_column(gradient: &LinearGradient, width: u32, height: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height);
        pixmap.fill_rect_gradient(Rect::new(0, 0, width as i32, height as i32), gradient);
        pixmap
    }

    #[test]
    fn test_vertical_clamps_outside_range() {
        let gradient = LinearGradient::vertical(10, 20, Color::BLACK, Color::WHITE);
        let pixmap = shade_column(&gradient, 1, 32);

        assert_eq!(pixmap.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(pixmap.pixel(0, 31), Some(Color::WHITE));
    }

    #[test]
    fn test_vertical_ignores_x() {
        let gradient = LinearGradient::vertical(0, 8, Color::BLACK, Color::WHITE);
        let pixmap = shade_column(&gradient, 4, 8);
        assert_eq!(pixmap.pixel(0, 3), pixmap.pixel(3, 3));
    }

    #[test]
    fn test_monotonic_along_axis() {
        let gradient = LinearGradient::vertical(0, 16, Color::BLACK, Color::WHITE);
        let pixmap = shade_column(&gradient, 1, 16);

        let reds: Vec<u8> = (0..16).filter_map(|y| pixmap.pixel(0, y)).map(|c| c.r).collect();
        assert_eq!(reds.len(), 16);
        assert!(reds.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(reds[0] < reds[15]);
    }

    #[test]
    fn test_degenerate_gradient_uses_end_color() {
        let gradient = LinearGradient::vertical(4, 4, Color::BLACK, Color::WHITE);
        let pixmap = shade_column(&gradient, 1, 8);
        assert_eq!(pixmap.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(0, 7), Some(Color::WHITE));
    }
}
