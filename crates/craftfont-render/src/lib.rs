//! craftfont Render
//!
//! The raster side of craftfont: an abstract [`RasterSurface`] exposing the five primitives
//! the text pipeline needs (scaled region blit, solid fill, gradient fill, clear, and the
//! [`CompositeMode::SourceIn`] recolor mode), plus [`Pixmap`], the CPU implementation backed
//! by a `tiny_skia::Pixmap`.
//!
//! ```
//! use craftfont_render::{Color, Pixmap, RasterSurface};
//! use craftfont_core::geometry::Rect;
//!
//! let mut pixmap = Pixmap::new(16, 16);
//! pixmap.fill_rect(Rect::new(0, 0, 4, 4), Color::RED);
//! assert_eq!(pixmap.pixel(1, 1), Some(Color::RED));
//! ```

pub mod blend;
pub mod color;
pub mod error;
pub mod gradient;
pub mod pixmap;
pub mod surface;

pub use blend::CompositeMode;
pub use color::Color;
pub use error::{SurfaceError, SurfaceResult};
pub use gradient::LinearGradient;
pub use pixmap::Pixmap;
pub use surface::{PaintScope, RasterSurface};
