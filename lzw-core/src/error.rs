//! LZW codec error types.

use thiserror::Error;

/// Errors produced by the LZW core.
#[derive(Debug, Error)]
pub enum LzwError {
    /// `initial_bits`/`max_bits` fell outside the supported range, or
    /// `initial_bits > max_bits`.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of which argument failed and why.
        message: String,
    },

    /// Decoder received a code that is neither in the dictionary nor
    /// equal to the about-to-be-assigned `next_code`.
    #[error("invalid LZW code: {0}")]
    InvalidCode(u32),

    /// The bit-unpacker could not assemble a full code before input ran out.
    #[error("truncated stream: incomplete code at end of input")]
    TruncatedStream,

    /// An encoder step found `current_match` absent from the dictionary.
    ///
    /// This can only happen from a bug in the core itself; it is fatal.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

/// Result type for LZW core operations.
pub type Result<T> = std::result::Result<T, LzwError>;

impl LzwError {
    /// Build an [`LzwError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
