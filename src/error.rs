/// Crate-level error type for the crest spectral analysis library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A required dimension is zero or too small.
    #[error("invalid size for `{name}`: {value} ({reason})")]
    InvalidSize {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// Spectrum data contains non-finite values (NaN or Inf).
    #[error("spectrum contains non-finite values")]
    NonFiniteSpectrum,
}

/// Convenience Result type for crest operations.
pub type Result<T> = std::result::Result<T, Error>;
