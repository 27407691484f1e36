use thiserror::Error;

/// Top-level error type for the polybuffer crate.
#[derive(Debug, Error)]
pub enum PolybufferError {
    /// An operation received fewer than 3 vertices, or an offset annihilated
    /// the polygon's entire area.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A scaled coordinate or offset distance would leave the integer domain
    /// supported by the clipping backend.
    #[error("scaled value {value} exceeds the clipping backend's integer domain (±{limit})")]
    PrecisionOverflow {
        /// The offending value after scaling.
        value: f64,
        /// Largest magnitude the backend accepts.
        limit: i64,
    },
}

/// Convenience type alias for results using [`PolybufferError`].
pub type Result<T> = std::result::Result<T, PolybufferError>;
