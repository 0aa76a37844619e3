//! craftfont Text - bitmap font rendering with formatting codes
//!
//! Renders text from a 16x16 glyph atlas of 8x8 cells, the way a certain block-building
//! game draws its GUI text:
//!
//! - Fixed per-glyph widths from a 256-slot code page ([`glyph`])
//! - `§` formatting codes for color, bold, strikethrough, underline and italic ([`format`])
//! - Bright and dim (shadow) palettes ([`style`])
//! - Glyph compositing through a per-run scratch buffer ([`FontRenderer`])
//! - Tooltip boxes around a line of text ([`TooltipRenderer`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use craftfont_render::Pixmap;
//! use craftfont_text::{FontRenderer, RendererConfig, TooltipRenderer};
//!
//! let mut font = FontRenderer::new(RendererConfig::default())?;
//! futures_lite::future::block_on(font.load_atlas("ascii.png"))?;
//!
//! let mut canvas = Pixmap::new(320, 64);
//! font.draw_formatted_with_shadow(&mut canvas, "§6Golden §lApple", 4, 4)?;
//!
//! let mut tooltip = TooltipRenderer::new(font);
//! tooltip.render_tooltip(&mut canvas, "§bDiamond Sword", 4, 24)?;
//! canvas.save_png("out.png").ok();
//! # Ok::<(), craftfont_text::TextError>(())
//! ```
//!
//! Coordinates and widths are destination pixels, already multiplied by the scale factor.
//! Characters outside the code page are zero-width and draw nothing.

pub mod atlas;
pub mod error;
pub mod format;
pub mod glyph;
pub mod renderer;
pub mod style;
pub mod tooltip;

pub use atlas::{AtlasLoader, GlyphAtlas};
pub use error::{TextError, TextResult};
pub use format::{FORMAT_MARKER, FormattingParser, TextRun, formatted_width, parse_formatted};
pub use glyph::{glyph_index, glyph_width, string_width};
pub use renderer::{FontRenderer, RendererConfig};
pub use style::{ColorCode, Paint, StyleState, resolve_fill};
pub use tooltip::{TooltipFont, TooltipRenderer};

// Re-export the surface types callers draw onto
pub use craftfont_render::{Color, Pixmap, RasterSurface};
