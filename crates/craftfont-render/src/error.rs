use std::fmt;

/// Errors raised by raster surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Width or height is zero, or the pixel buffer does not match the dimensions.
    InvalidDimensions { width: u32, height: u32 },
    /// Image encoding failed
    EncodeFailed(String),
    /// IO error
    IoError(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid surface dimensions: {}x{}", width, height)
            }
            Self::EncodeFailed(msg) => write!(f, "Image encoding failed: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

impl From<image::ImageError> for SurfaceError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => SurfaceError::IoError(e.to_string()),
            other => SurfaceError::EncodeFailed(other.to_string()),
        }
    }
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;
