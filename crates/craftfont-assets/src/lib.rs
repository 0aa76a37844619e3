//! craftfont Assets
//!
//! Small asset layer used to bring the glyph atlas into memory:
//!
//! - [`AssetSource`]: where bytes come from (a path on disk or an in-memory buffer)
//! - [`BytesReader`]: async byte access, with [`FileReader`] for native filesystems
//! - [`AssetLoader`]: decodes bytes into a typed asset
//! - [`AssetState`]: the `Unloaded -> Loading -> Ready | Failed` lifecycle
//!
//! ```no_run
//! use craftfont_assets::*;
//!
//! struct Utf8Loader;
//!
//! impl AssetLoader for Utf8Loader {
//!     type Asset = String;
//!
//!     fn extensions(&self) -> &[&str] {
//!         &["txt"]
//!     }
//!
//!     fn load(&self, ctx: LoadContext<'_>) -> AssetResult<String> {
//!         String::from_utf8(ctx.bytes.to_vec()).map_err(|e| AssetError::LoaderError {
//!             path: ctx.source.display_path(),
//!             message: e.to_string(),
//!         })
//!     }
//! }
//!
//! let reader = FileReader::new(".");
//! let source = AssetSource::disk("hello.txt");
//! let text = futures_lite::future::block_on(load_asset(&reader, &source, &Utf8Loader));
//! ```

pub mod error;
pub mod io;
pub mod loader;
pub mod source;
pub mod state;

pub use error::{AssetError, AssetResult};
pub use io::{BytesFuture, BytesReader, FileReader};
pub use loader::{AssetLoader, LoadContext, load_asset};
pub use source::AssetSource;
pub use state::{AssetState, LoadState};
