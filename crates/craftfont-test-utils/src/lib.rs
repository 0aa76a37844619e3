//! Test utilities for craftfont.
//!
//! - [`atlas`]: synthetic glyph atlases with known pixel patterns
//! - `RecordingSurface`: a [`RasterSurface`](craftfont_render::RasterSurface) that records
//!   every primitive call while still rasterizing (requires the `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use craftfont_core::geometry::Rect;
//! use craftfont_render::{Color, RasterSurface};
//! use craftfont_test_utils::RecordingSurface;
//!
//! let mut surface = RecordingSurface::new(8, 8);
//! surface.fill_rect(Rect::new(0, 0, 2, 2), Color::RED);
//!
//! assert_eq!(surface.count_fill_rects(), 1);
//! assert_eq!(surface.pixmap().pixel(1, 1), Some(Color::RED));
//! # }
//! ```

pub mod atlas;
#[cfg(feature = "mock")]
pub mod recording;

pub use atlas::*;
#[cfg(feature = "mock")]
pub use recording::*;
