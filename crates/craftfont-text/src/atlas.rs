//! The glyph atlas: a 16x16 grid of 8x8 glyph cells.

use craftfont_assets::{AssetError, AssetLoader, AssetResult, LoadContext};
use craftfont_core::geometry::Rect;
use craftfont_render::Pixmap;

use crate::error::{TextError, TextResult};
use crate::glyph::{CELL_SIZE, GLYPHS_PER_ROW, MAX_SCALE, glyph_cell};

/// Smallest accepted atlas edge, in unscaled pixels.
pub const MIN_ATLAS_SIZE: u32 = CELL_SIZE * GLYPHS_PER_ROW as u32;

/// Reject scales of zero and scales whose scaled atlas would leave `i32` pixel space.
pub(crate) fn check_scale(scale: u32) -> TextResult<()> {
    if scale == 0 || scale > MAX_SCALE {
        return Err(TextError::InvalidScale(scale));
    }
    Ok(())
}

/// A loaded atlas, kept both as authored and upscaled for the current scale factor.
///
/// Read-only once built; rescaling produces a new atlas.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    source: Pixmap,
    scaled: Pixmap,
    scale: u32,
}

impl GlyphAtlas {
    /// Wrap an authored atlas image, upscaling it by `scale`.
    pub fn new(source: Pixmap, scale: u32) -> TextResult<Self> {
        check_scale(scale)?;
        if source.width() < MIN_ATLAS_SIZE || source.height() < MIN_ATLAS_SIZE {
            return Err(TextError::InvalidAtlas {
                width: source.width(),
                height: source.height(),
            });
        }

        let scaled = if scale == 1 {
            source.clone()
        } else {
            source
                .scaled(scale)
                .map_err(|_| TextError::InvalidScale(scale))?
        };
        tracing::debug!(
            "Built glyph atlas {}x{} at scale {}",
            source.width(),
            source.height(),
            scale
        );
        Ok(Self {
            source,
            scaled,
            scale,
        })
    }

    pub fn from_image(image: image::RgbaImage, scale: u32) -> TextResult<Self> {
        Self::new(Pixmap::from_image(image), scale)
    }

    /// Decode a PNG (or any format `image` was built with).
    pub fn from_bytes(bytes: &[u8], scale: u32) -> TextResult<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| TextError::AtlasLoadFailed(e.to_string()))?
            .to_rgba8();
        Self::from_image(image, scale)
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The atlas as authored, unscaled.
    pub fn source(&self) -> &Pixmap {
        &self.source
    }

    /// The atlas upscaled to [`scale`](Self::scale); cell rects index into this.
    pub fn pixmap(&self) -> &Pixmap {
        &self.scaled
    }

    /// Region of the scaled atlas holding glyph `index`.
    pub fn cell_rect(&self, index: usize) -> Rect<i32> {
        let (column, row) = glyph_cell(index);
        let cell = (CELL_SIZE * self.scale) as i32;
        Rect::new(column as i32 * cell, row as i32 * cell, cell, cell)
    }

    /// The same atlas at another scale. Returns a clone when the scale is unchanged.
    pub fn rescaled(&self, scale: u32) -> TextResult<Self> {
        if scale == self.scale {
            return Ok(self.clone());
        }
        Self::new(self.source.clone(), scale)
    }
}

/// Decodes atlas images for [`craftfont_assets::load_asset`].
#[derive(Debug, Clone, Copy)]
pub struct AtlasLoader {
    pub scale: u32,
}

impl AtlasLoader {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }
}

impl AssetLoader for AtlasLoader {
    type Asset = GlyphAtlas;

    fn extensions(&self) -> &[&str] {
        &["png"]
    }

    fn load(&self, ctx: LoadContext<'_>) -> AssetResult<GlyphAtlas> {
        GlyphAtlas::from_bytes(ctx.bytes, self.scale).map_err(|e| AssetError::LoaderError {
            path: ctx.source.display_path(),
            message: e.to_string(),
        })
    }
}
