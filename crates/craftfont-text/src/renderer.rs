//! Glyph compositing.
//!
//! Each run is laid out into a scratch [`Pixmap`] sized to the run, decorated, tinted with a
//! source-in fill and then blitted onto the destination surface. Tinting a scratch buffer
//! rather than the destination keeps already drawn runs untouched.

use std::sync::Arc;

use craftfont_assets::{AssetSource, AssetState, BytesReader, FileReader, load_asset};
use craftfont_core::geometry::{Pos, Rect};
use craftfont_core::profiling::profile_function;
use craftfont_render::{Color, CompositeMode, PaintScope, Pixmap, RasterSurface};

use crate::atlas::{AtlasLoader, GlyphAtlas, check_scale};
use crate::error::{TextError, TextResult};
use crate::format::{FormattingParser, TextRun, formatted_width};
use crate::glyph::{CELL_SIZE, LINE_HEIGHT, glyph_index, glyph_width, string_width};
use crate::style::StyleState;

/// Height of the band shifted right for italic runs, in scaled units.
const ITALIC_BAND: u32 = 3;

/// Vertical offset of the strikethrough bar, in scaled units.
const STRIKE_OFFSET: u32 = 3;

/// Renderer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    /// Integer multiplier for every glyph and spacing constant, like a GUI scale setting.
    pub scale: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { scale: 2 }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

/// Draws bitmap-font text onto any [`RasterSurface`].
///
/// The renderer owns its atlas and scratch buffer; nothing is shared between instances.
///
/// ```
/// use craftfont_render::Pixmap;
/// use craftfont_text::{FontRenderer, GlyphAtlas, RendererConfig};
///
/// let mut renderer = FontRenderer::new(RendererConfig::new().with_scale(1))?;
/// renderer.set_atlas(GlyphAtlas::new(Pixmap::new(128, 128), 1)?)?;
///
/// let mut canvas = Pixmap::new(64, 16);
/// renderer.draw_formatted_with_shadow(&mut canvas, "§aHello", 0, 0)?;
/// # Ok::<(), craftfont_text::TextError>(())
/// ```
pub struct FontRenderer {
    config: RendererConfig,
    atlas: AssetState<GlyphAtlas>,
    scratch: Pixmap,
    cursor: Pos<i32>,
}

impl FontRenderer {
    pub fn new(config: RendererConfig) -> TextResult<Self> {
        check_scale(config.scale)?;
        Ok(Self {
            config,
            atlas: AssetState::Unloaded,
            scratch: Pixmap::new(0, LINE_HEIGHT * config.scale),
            cursor: Pos::new(config.scale as i32, 0),
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn scale(&self) -> u32 {
        self.config.scale
    }

    /// Change the scale factor. Resets the scratch state and rescales a loaded atlas.
    pub fn set_scale(&mut self, scale: u32) -> TextResult<()> {
        check_scale(scale)?;
        if let Some(atlas) = self.atlas.get() {
            let rescaled = atlas.rescaled(scale)?;
            self.atlas = AssetState::Ready(Arc::new(rescaled));
        }
        self.config.scale = scale;
        self.scratch = Pixmap::new(0, LINE_HEIGHT * scale);
        self.cursor = Pos::new(scale as i32, 0);
        tracing::debug!("Font renderer scale set to {}", scale);
        Ok(())
    }

    /// Install an already decoded atlas, rescaling it to this renderer's scale if needed.
    /// Replaces whatever state the atlas was in.
    pub fn set_atlas(&mut self, atlas: GlyphAtlas) -> TextResult<()> {
        let atlas = atlas.rescaled(self.config.scale)?;
        self.atlas = AssetState::Ready(Arc::new(atlas));
        Ok(())
    }

    pub fn atlas_state(&self) -> &AssetState<GlyphAtlas> {
        &self.atlas
    }

    pub fn is_ready(&self) -> bool {
        self.atlas.is_ready()
    }

    /// `Ok` when the atlas is ready, otherwise the error a draw call would return.
    pub fn check_ready(&self) -> TextResult<()> {
        self.ready_atlas().map(|_| ())
    }

    /// Load the atlas from the filesystem (relative to the working directory) or from bytes.
    ///
    /// Resolves once. On failure the renderer is left in the failed state and every draw
    /// returns [`TextError::AtlasLoadFailed`] until another load succeeds.
    pub async fn load_atlas(&mut self, source: impl Into<AssetSource>) -> TextResult<()> {
        self.load_atlas_with(&FileReader::default(), &source.into())
            .await
    }

    /// Load the atlas through a custom byte reader.
    pub async fn load_atlas_with(
        &mut self,
        reader: &dyn BytesReader,
        source: &AssetSource,
    ) -> TextResult<()> {
        self.atlas = AssetState::Loading;
        let loader = AtlasLoader::new(self.config.scale);
        let result = load_asset(reader, source, &loader).await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(e) => Err(TextError::AtlasLoadFailed(e.to_string())),
        };
        self.atlas.resolve(result);
        if outcome.is_ok() {
            tracing::debug!("Glyph atlas ready: {}", source.display_path());
        }
        outcome
    }

    fn ready_atlas(&self) -> TextResult<Arc<GlyphAtlas>> {
        match &self.atlas {
            AssetState::Ready(atlas) => Ok(Arc::clone(atlas)),
            AssetState::Failed(err) => Err(TextError::AtlasLoadFailed(err.to_string())),
            AssetState::Unloaded | AssetState::Loading => Err(TextError::AtlasNotReady),
        }
    }

    /// Width of an unformatted string in pixels.
    pub fn measure_plain_width(&self, text: &str, bold: bool) -> u32 {
        string_width(text, bold, self.config.scale)
    }

    /// Width of the scratch buffer a run needs: its glyphs plus one unit for the underline.
    pub fn measure_run(&self, run: &TextRun) -> u32 {
        run.width(self.config.scale) + self.config.scale
    }

    /// Width of a formatted string; codes take no space.
    pub fn text_width(&self, text: &str) -> u32 {
        formatted_width(text, self.config.scale)
    }

    /// Height of a single line of text, including the underline row.
    pub fn text_height(&self, _text: &str) -> u32 {
        LINE_HEIGHT * self.config.scale
    }

    /// Draw `text` as one run in `style`, ignoring formatting codes.
    pub fn draw_plain<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
        style: StyleState,
    ) -> TextResult<()> {
        profile_function!();
        let atlas = self.ready_atlas()?;
        self.draw_styled(surface, &atlas, text, style, x, y);
        Ok(())
    }

    /// Draw a parsed run at `(x, y)`. The run's own offset is not applied.
    pub fn draw_run<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        run: &TextRun,
        x: i32,
        y: i32,
    ) -> TextResult<()> {
        let atlas = self.ready_atlas()?;
        self.draw_styled(surface, &atlas, &run.text, run.style, x, y);
        Ok(())
    }

    /// Parse `text` for formatting codes and draw each run left to right from `(x, y)`.
    pub fn draw_formatted<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
        shadow: bool,
    ) -> TextResult<()> {
        profile_function!();
        let atlas = self.ready_atlas()?;
        for run in FormattingParser::new(text, shadow, self.config.scale) {
            let offset = i32::try_from(run.offset).unwrap_or(i32::MAX);
            self.draw_styled(surface, &atlas, &run.text, run.style, x.saturating_add(offset), y);
        }
        Ok(())
    }

    /// Draw `text` with a dim copy one unit down and right behind it.
    pub fn draw_formatted_with_shadow<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
    ) -> TextResult<()> {
        let offset = self.config.scale as i32;
        let (shadow_x, shadow_y) = (x.saturating_add(offset), y.saturating_add(offset));
        self.draw_formatted(surface, text, shadow_x, shadow_y, true)?;
        self.draw_formatted(surface, text, x, y, false)
    }

    fn draw_styled<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        atlas: &GlyphAtlas,
        text: &str,
        style: StyleState,
        x: i32,
        y: i32,
    ) {
        let scale = self.config.scale;
        let paint = style.paint();
        let width = string_width(text, paint.bold, scale) + scale;
        tracing::trace!("Drawing run {:?} at ({}, {}), {}px wide", text, x, y, width);

        let mut pass = ScratchPass::begin(&mut self.scratch, &mut self.cursor, width, scale);
        for c in text.chars() {
            pass.draw_glyph(atlas, c, paint.bold);
        }
        if paint.underline {
            pass.underline();
        }
        if paint.strikethrough {
            pass.strikethrough();
        }
        if let Some(fill) = paint.fill {
            pass.tint(fill);
        }
        pass.blit(surface, x, y, paint.italic);
    }
}

/// One run's use of the scratch buffer. Clears the buffer and resets the cursor on drop.
struct ScratchPass<'a> {
    scratch: &'a mut Pixmap,
    cursor: &'a mut Pos<i32>,
    scale: u32,
}

impl<'a> ScratchPass<'a> {
    fn begin(scratch: &'a mut Pixmap, cursor: &'a mut Pos<i32>, width: u32, scale: u32) -> Self {
        scratch.resize(width, LINE_HEIGHT * scale);
        *cursor = Pos::new(scale as i32, 0);
        Self {
            scratch,
            cursor,
            scale,
        }
    }

    fn unit(&self) -> i32 {
        self.scale as i32
    }

    fn draw_glyph(&mut self, atlas: &GlyphAtlas, c: char, bold: bool) {
        let advance = glyph_width(c, self.scale) as i32;
        let bold_extra = if bold { self.unit() } else { 0 };

        let Some(index) = glyph_index(c) else {
            self.cursor.x = self.cursor.x.saturating_add(advance + bold_extra);
            return;
        };

        let src = atlas.cell_rect(index);
        let cell = (CELL_SIZE * self.scale) as i32;
        let dest = Rect::new(self.cursor.x, self.cursor.y, cell, cell);
        self.scratch.draw_pixmap(atlas.pixmap(), src, dest);
        if bold {
            self.scratch
                .draw_pixmap(atlas.pixmap(), src, dest.translate(bold_extra, 0));
        }
        self.cursor.x = self.cursor.x.saturating_add(advance + bold_extra);
    }

    fn underline(&mut self) {
        let s = self.unit();
        let width = self.scratch.width() as i32;
        let height = self.scratch.height() as i32;
        self.scratch
            .fill_rect(Rect::new(0, height - s, width, s), Color::WHITE);
    }

    fn strikethrough(&mut self) {
        let s = self.unit();
        let width = self.scratch.width() as i32;
        self.scratch.fill_rect(
            Rect::new(s, STRIKE_OFFSET as i32 * s, width - s, s),
            Color::WHITE,
        );
    }

    /// Recolor every opaque pixel, leaving transparent ones untouched.
    fn tint(&mut self, fill: Color) {
        let bounds = Rect::from_origin_size(Default::default(), self.scratch.size());
        let mut scope = PaintScope::new(&mut *self.scratch, CompositeMode::SourceIn);
        scope.fill_rect(bounds, fill);
    }

    fn blit<S: RasterSurface + ?Sized>(&self, surface: &mut S, x: i32, y: i32, italic: bool) {
        let width = self.scratch.width() as i32;
        let height = self.scratch.height() as i32;
        if !italic {
            surface.draw_pixmap_at(&*self.scratch, x, y);
            return;
        }

        // Top band one unit right of the rest gives the slant.
        let s = self.unit();
        let band = ITALIC_BAND as i32 * s;
        let top = Rect::new(0, 0, width, band);
        surface.draw_pixmap(&*self.scratch, top, top.translate(x.saturating_add(s), y));
        let bottom = Rect::new(0, band, width, height - band);
        surface.draw_pixmap(&*self.scratch, bottom, bottom.translate(x, y));
    }
}

impl Drop for ScratchPass<'_> {
    fn drop(&mut self) {
        self.scratch.clear();
        *self.cursor = Pos::new(self.scale as i32, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(scale: u32) -> FontRenderer {
        FontRenderer::new(RendererConfig::new().with_scale(scale)).unwrap()
    }

    #[test]
    fn test_default_scale_is_two() {
        assert_eq!(RendererConfig::default().scale, 2);
        assert_eq!(renderer(2).scale(), 2);
    }

    #[test]
    fn test_zero_scale_rejected() {
        assert_eq!(
            FontRenderer::new(RendererConfig::new().with_scale(0)).err(),
            Some(TextError::InvalidScale(0))
        );
        assert_eq!(renderer(1).set_scale(0), Err(TextError::InvalidScale(0)));
    }

    #[test]
    fn test_overflowing_scale_rejected() {
        let huge = u32::MAX / 4;
        assert_eq!(
            FontRenderer::new(RendererConfig::new().with_scale(huge)).err(),
            Some(TextError::InvalidScale(huge))
        );

        let mut renderer = renderer(2);
        assert_eq!(renderer.set_scale(huge), Err(TextError::InvalidScale(huge)));
        assert_eq!(renderer.scale(), 2);
    }

    #[test]
    fn test_draw_before_load_is_not_ready() {
        let mut renderer = renderer(1);
        let mut canvas = Pixmap::new(16, 16);
        assert_eq!(
            renderer.draw_formatted(&mut canvas, "abc", 0, 0, false),
            Err(TextError::AtlasNotReady)
        );
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_measure_run_adds_underline_unit() {
        let renderer = renderer(2);
        let run = TextRun::new("Red", StyleState::default());
        assert_eq!(renderer.measure_run(&run), 18 * 2 + 2);
    }

    #[test]
    fn test_text_metrics() {
        let renderer = renderer(3);
        assert_eq!(
            renderer.text_width("§1Red§2stone"),
            renderer.measure_plain_width("Redstone", false)
        );
        assert_eq!(renderer.text_height("anything"), 27);
    }

    #[test]
    fn test_set_scale_rescales_atlas() {
        let mut renderer = renderer(1);
        renderer
            .set_atlas(GlyphAtlas::new(Pixmap::new(128, 128), 1).unwrap())
            .unwrap();
        renderer.set_scale(2).unwrap();

        let atlas = renderer.atlas_state().get().unwrap();
        assert_eq!(atlas.scale(), 2);
        assert_eq!(atlas.pixmap().width(), 256);
    }

    #[test]
    fn test_set_atlas_rescales_to_renderer() {
        let mut renderer = renderer(3);
        renderer
            .set_atlas(GlyphAtlas::new(Pixmap::new(128, 128), 1).unwrap())
            .unwrap();
        assert!(renderer.is_ready());
        assert_eq!(renderer.atlas_state().get().unwrap().scale(), 3);
    }

    #[test]
    fn test_scratch_is_cleared_after_draw() {
        let mut renderer = renderer(1);
        renderer
            .set_atlas(GlyphAtlas::new(Pixmap::new(128, 128), 1).unwrap())
            .unwrap();
        let mut canvas = Pixmap::new(32, 16);
        renderer
            .draw_plain(&mut canvas, "ab", 0, 0, StyleState::new().underline())
            .unwrap();

        assert!(renderer.scratch.is_blank());
        assert_eq!(renderer.cursor, Pos::new(1, 0));
    }
}
