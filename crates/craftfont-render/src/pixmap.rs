//! CPU raster surface backed by `tiny_skia::Pixmap`.

use std::path::Path;

use craftfont_core::geometry::{Rect, Size};
use image::RgbaImage;
use tiny_skia::{
    BlendMode, FilterQuality, Paint, Pattern, PixmapPaint, Shader, SpreadMode, Transform,
};

use crate::{Color, CompositeMode, LinearGradient, RasterSurface, SurfaceError, SurfaceResult};

/// An owned RGBA8 pixel buffer implementing [`RasterSurface`].
///
/// Pixels are stored premultiplied by tiny-skia; [`pixel`](Self::pixel) and
/// [`to_image`](Self::to_image) hand back straight alpha. A pixmap with a zero dimension has
/// no backing storage and draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    inner: Option<tiny_skia::Pixmap>,
    width: u32,
    height: u32,
    composite: CompositeMode,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: tiny_skia::Pixmap::new(width, height),
            width,
            height,
            composite: CompositeMode::default(),
        }
    }

    /// Copy a straight-alpha image.
    pub fn from_image(image: RgbaImage) -> Self {
        let mut pixmap = Self::new(image.width(), image.height());
        if let Some(inner) = pixmap.inner.as_mut() {
            for (dst, px) in inner.pixels_mut().iter_mut().zip(image.pixels()) {
                *dst = Color::from(*px).premultiply();
            }
        }
        pixmap
    }

    /// Build a pixmap from raw straight-alpha RGBA bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> SurfaceResult<Self> {
        RgbaImage::from_raw(width, height, data)
            .map(Self::from_image)
            .ok_or(SurfaceError::InvalidDimensions { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate to a new size. Contents are discarded and the result is transparent,
    /// matching how resizing a canvas resets it.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            if let Some(inner) = self.inner.as_mut() {
                inner.fill(tiny_skia::Color::TRANSPARENT);
            }
            return;
        }
        self.inner = tiny_skia::Pixmap::new(width, height);
        self.width = width;
        self.height = height;
    }

    /// Pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.inner.as_ref()?.pixel(x, y).map(Color::from)
    }

    /// Pixels as straight-alpha colors, row-major.
    pub fn pixels(&self) -> Vec<Color> {
        self.inner
            .as_ref()
            .map(|inner| inner.pixels().iter().copied().map(Color::from).collect())
            .unwrap_or_default()
    }

    /// `true` when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.inner
            .as_ref()
            .is_none_or(|inner| inner.pixels().iter().all(|px| px.alpha() == 0))
    }

    /// Integer upscale with nearest-neighbour sampling (hard pixel edges).
    pub fn scaled(&self, factor: u32) -> SurfaceResult<Pixmap> {
        let width = self.width.saturating_mul(factor);
        let height = self.height.saturating_mul(factor);
        let Some(source) = self.inner.as_ref() else {
            return Ok(Pixmap::new(width, height));
        };

        let mut scaled = Pixmap::new(width, height);
        let Some(target) = scaled.inner.as_mut() else {
            return Err(SurfaceError::InvalidDimensions { width, height });
        };
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            blend_mode: BlendMode::Source,
            ..PixmapPaint::default()
        };
        target.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            Transform::from_scale(factor as f32, factor as f32),
            None,
        );
        Ok(scaled)
    }

    /// Copy out as a straight-alpha image.
    pub fn to_image(&self) -> RgbaImage {
        let pixels = self.pixels();
        let bytes: Vec<u8> = bytemuck::cast_slice(pixels.as_slice()).to_vec();
        RgbaImage::from_raw(self.width, self.height, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> SurfaceResult<()> {
        if self.inner.is_none() {
            return Err(SurfaceError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!("Saved {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn bounds(&self) -> Rect<i32> {
        Rect::from_origin_size(Default::default(), self.size())
    }

    /// Fill the part of `rect` inside the surface with `shader` under `blend_mode`.
    fn shade_rect(&mut self, rect: Rect<i32>, shader: Shader<'_>, blend_mode: BlendMode) {
        let Some(clip) = rect.intersect(&self.bounds()) else {
            return;
        };
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        let Some(area) = tiny_skia::Rect::from_xywh(
            clip.x as f32,
            clip.y as f32,
            clip.width as f32,
            clip.height as f32,
        ) else {
            return;
        };
        let paint = Paint {
            shader,
            blend_mode,
            anti_alias: false,
            ..Paint::default()
        };
        inner.fill_rect(area, &paint, Transform::identity(), None);
    }
}

impl RasterSurface for Pixmap {
    fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    fn composite_mode(&self) -> CompositeMode {
        self.composite
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn fill_rect(&mut self, rect: Rect<i32>, color: Color) {
        let blend_mode = self.composite.blend_mode();
        self.shade_rect(rect, Shader::SolidColor(color.into()), blend_mode);
    }

    fn fill_rect_gradient(&mut self, rect: Rect<i32>, gradient: &LinearGradient) {
        let blend_mode = self.composite.blend_mode();
        self.shade_rect(rect, gradient.shader(), blend_mode);
    }

    fn clear_rect(&mut self, rect: Rect<i32>) {
        self.shade_rect(rect, Shader::SolidColor(tiny_skia::Color::TRANSPARENT), BlendMode::Clear);
    }

    fn draw_pixmap(&mut self, source: &Pixmap, src_rect: Rect<i32>, dest_rect: Rect<i32>) {
        if src_rect.is_empty() || dest_rect.is_empty() {
            return;
        }
        let Some(pixels) = source.inner.as_ref() else {
            return;
        };

        // Map src_rect onto dest_rect and sample the source as a pattern over the target.
        let sx = dest_rect.width as f32 / src_rect.width as f32;
        let sy = dest_rect.height as f32 / src_rect.height as f32;
        let transform = Transform::from_row(
            sx,
            0.0,
            0.0,
            sy,
            dest_rect.x as f32 - src_rect.x as f32 * sx,
            dest_rect.y as f32 - src_rect.y as f32 * sy,
        );
        let pattern = Pattern::new(
            pixels.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Nearest,
            1.0,
            transform,
        );
        let blend_mode = self.composite.blend_mode();
        self.shade_rect(dest_rect, pattern, blend_mode);
    }
}
