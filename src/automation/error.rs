use crate::desktop::DesktopError;
use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for clicker operations.
pub type ClickerResult<T> = Result<T, ClickerError>;

/// The error type for startup and scan loop failures.
#[derive(Debug, Error)]
pub enum ClickerError {
    #[error("Asset not found at {path:?}. Please verify installation.")]
    MissingAsset { path: PathBuf },

    #[error("Failed to decode asset {path:?}: {source}")]
    AssetDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No monitors found")]
    NoMonitorsFound,

    #[error("Failed to query the desktop: {source}")]
    Desktop {
        #[from]
        source: DesktopError,
    },

    #[error("Screen capture failed: {source}")]
    Capture { source: DesktopError },

    #[error("Click injection failed: {source}")]
    Injection { source: DesktopError },

    #[error("Failed to arrange windows: {source}")]
    WindowArrangement { source: DesktopError },

    #[error("Failed to set up logging: {description}")]
    Logging { description: String },
}

impl ClickerError {
    /// Errors raised before the scan loop starts
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            ClickerError::MissingAsset { .. }
                | ClickerError::AssetDecode { .. }
                | ClickerError::NoMonitorsFound
                | ClickerError::Desktop { .. }
                | ClickerError::WindowArrangement { .. }
                | ClickerError::Logging { .. }
        )
    }
}
