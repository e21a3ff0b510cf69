use std::path::PathBuf;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while loading fonts or writing wallpapers
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No usable font could be loaded
    #[error("failed to load font: {0}")]
    Font(String),

    /// Canvas dimensions the image encoder cannot represent
    #[error("invalid canvas size {width}x{height}")]
    Canvas { width: u32, height: u32 },

    /// Encoding or writing the image failed
    #[error("failed to save '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}
