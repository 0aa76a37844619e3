//! Compositing modes for raster surfaces.

use tiny_skia::BlendMode;

/// How source pixels are combined with the destination.
///
/// The variants are the Porter-Duff operators of the same names, carried out by
/// [`tiny_skia::BlendMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompositeMode {
    /// Standard alpha blending: source drawn over destination.
    ///
    /// Formula: `out.a = src.a + dst.a * (1 - src.a)`
    #[default]
    SourceOver,

    /// Keep the source only where the destination is opaque.
    ///
    /// Formula: `out = src * dst.a`
    ///
    /// Use for: recoloring already drawn glyph pixels while leaving transparent areas alone.
    SourceIn,
}

impl CompositeMode {
    pub fn blend_mode(self) -> BlendMode {
        match self {
            CompositeMode::SourceOver => BlendMode::SourceOver,
            CompositeMode::SourceIn => BlendMode::SourceIn,
        }
    }
}

impl From<CompositeMode> for BlendMode {
    fn from(mode: CompositeMode) -> Self {
        mode.blend_mode()
    }
}
