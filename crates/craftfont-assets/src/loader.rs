//! Asset loader traits and infrastructure.

use crate::error::{AssetError, AssetResult};
use crate::io::BytesReader;
use crate::source::AssetSource;

/// Context provided to asset loaders during loading.
pub struct LoadContext<'a> {
    /// The source of the asset being loaded.
    pub source: &'a AssetSource,
    /// The raw bytes of the asset.
    pub bytes: &'a [u8],
    /// File extension (without the dot), if available.
    pub extension: Option<&'a str>,
}

impl<'a> LoadContext<'a> {
    /// Create a new load context.
    pub fn new(source: &'a AssetSource, bytes: &'a [u8], extension: Option<&'a str>) -> Self {
        Self {
            source,
            bytes,
            extension,
        }
    }
}

/// Trait for loading assets from bytes.
///
/// Implement this trait to add support for loading a specific asset type.
pub trait AssetLoader: Send + Sync + 'static {
    /// The asset type this loader produces.
    type Asset: Send + Sync + 'static;

    /// The file extensions this loader handles (without dots).
    fn extensions(&self) -> &[&str];

    /// Decode an asset from the provided context.
    fn load(&self, ctx: LoadContext<'_>) -> AssetResult<Self::Asset>;
}

/// Read `source` and decode it with `loader`.
///
/// Resolves exactly once: with the decoded asset, or with the first error hit while
/// reading or decoding. Nothing is retried.
pub async fn load_asset<L: AssetLoader>(
    reader: &dyn BytesReader,
    source: &AssetSource,
    loader: &L,
) -> AssetResult<L::Asset> {
    let extension = source.extension();
    if let Some(ext) = extension
        && !loader
            .extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    {
        return Err(AssetError::UnsupportedExtension {
            extension: ext.to_string(),
        });
    }

    tracing::debug!("Loading asset from {}", source.display_path());

    let result = match source {
        AssetSource::Disk { path } => {
            let bytes = reader.read_bytes(path).await?;
            loader.load(LoadContext::new(source, &bytes, extension))
        }
        AssetSource::Bytes { data, .. } => loader.load(LoadContext::new(source, data, extension)),
    };

    if let Err(e) = &result {
        tracing::warn!("Asset load failed: {}", e);
    }
    result
}
