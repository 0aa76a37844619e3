//! Asset state machine.

use std::sync::Arc;

use crate::error::AssetError;

/// The current state of an asset in the loading pipeline.
#[derive(Debug, Clone, Default)]
pub enum AssetState<T> {
    /// The asset has not been loaded yet.
    #[default]
    Unloaded,

    /// The asset is currently being loaded.
    Loading,

    /// The asset has been successfully loaded and is ready for use.
    Ready(Arc<T>),

    /// The asset failed to load.
    Failed(Arc<AssetError>),
}

impl<T> AssetState<T> {
    /// Returns `true` if the asset is in the `Unloaded` state.
    pub fn is_unloaded(&self) -> bool {
        matches!(self, AssetState::Unloaded)
    }

    /// Returns `true` if the asset is currently loading.
    pub fn is_loading(&self) -> bool {
        matches!(self, AssetState::Loading)
    }

    /// Returns `true` if the asset is ready for use.
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetState::Ready(_))
    }

    /// Returns `true` if the asset failed to load.
    pub fn is_failed(&self) -> bool {
        matches!(self, AssetState::Failed(_))
    }

    /// Get the asset if it's ready, or `None` otherwise.
    pub fn get(&self) -> Option<&Arc<T>> {
        match self {
            AssetState::Ready(asset) => Some(asset),
            _ => None,
        }
    }

    /// Get the error if loading failed.
    pub fn error(&self) -> Option<&Arc<AssetError>> {
        match self {
            AssetState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Record the outcome of a load.
    pub fn resolve(&mut self, result: Result<T, AssetError>) {
        *self = match result {
            Ok(asset) => AssetState::Ready(Arc::new(asset)),
            Err(err) => AssetState::Failed(Arc::new(err)),
        };
    }
}

/// Load state for reporting progress without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Not yet started loading.
    NotLoaded,

    /// Currently loading.
    Loading,

    /// Successfully loaded.
    Loaded,

    /// Failed to load.
    Failed,
}

impl LoadState {
    /// Returns true if loading has completed (successfully or not).
    pub fn is_done(&self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Failed)
    }
}

impl<T> From<&AssetState<T>> for LoadState {
    fn from(state: &AssetState<T>) -> Self {
        match state {
            AssetState::Unloaded => LoadState::NotLoaded,
            AssetState::Loading => LoadState::Loading,
            AssetState::Ready(_) => LoadState::Loaded,
            AssetState::Failed(_) => LoadState::Failed,
        }
    }
}
