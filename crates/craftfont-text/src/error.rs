use craftfont_assets::AssetError;

use crate::glyph::MAX_SCALE;

/// Errors that can occur in the text rendering system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A draw was issued before the glyph atlas finished loading.
    AtlasNotReady,

    /// The glyph atlas failed to load; the renderer cannot draw.
    AtlasLoadFailed(String),

    /// The atlas image is too small to hold a 16x16 grid of 8x8 cells.
    InvalidAtlas { width: u32, height: u32 },

    /// Scale factors must lie in `1..=MAX_SCALE`.
    InvalidScale(u32),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::AtlasNotReady => write!(f, "Glyph atlas is not loaded yet"),
            TextError::AtlasLoadFailed(msg) => write!(f, "Failed to load glyph atlas: {}", msg),
            TextError::InvalidAtlas { width, height } => write!(
                f,
                "Invalid glyph atlas: {}x{} is smaller than the 128x128 glyph grid",
                width, height
            ),
            TextError::InvalidScale(scale) => write!(
                f,
                "Invalid scale factor {}: must be between 1 and {}",
                scale, MAX_SCALE
            ),
        }
    }
}

impl std::error::Error for TextError {}

impl From<AssetError> for TextError {
    fn from(err: AssetError) -> Self {
        TextError::AtlasLoadFailed(err.to_string())
    }
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
