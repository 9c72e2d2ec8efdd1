use std::path::PathBuf;

/// Result alias used across the crate.
pub type IcopackResult<T> = Result<T, IcopackError>;

/// Every failure a conversion can surface.
///
/// A conversion reports exactly one of these; the first failing stage wins.
#[derive(thiserror::Error, Debug)]
pub enum IcopackError {
    /// The source could not be read, parsed, or has nothing to draw.
    #[error("load error: {0}")]
    Load(String),

    /// The requested output kind is not recognized.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A target size failed to rasterize.
    #[error("render error: {0}")]
    Render(String),

    /// The frame codec or the container assembly failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid configuration, such as an empty size or frame list.
    #[error("config error: {0}")]
    Config(String),

    /// The destination could not be created or written.
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl IcopackError {
    /// Build a [`IcopackError::Load`].
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`IcopackError::UnsupportedFormat`].
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`IcopackError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`IcopackError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`IcopackError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`IcopackError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
