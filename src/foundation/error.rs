/// Convenience result type used across curveed.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error taxonomy for the outer surfaces of the editor.
///
/// Editing, evaluation, rasterization and the text codec never fail; malformed input degrades to
/// defaults there. These variants cover configuration, file IO and image export.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    /// Invalid editor configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid raster parameters or a failed pixel export.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when reading or writing keyframe text outside the lenient parser.
    #[error("codec error: {0}")]
    Codec(String),

    /// Filesystem errors with the offending path baked into the message.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurveError {
    /// Build a [`CurveError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CurveError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`CurveError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Build a [`CurveError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
