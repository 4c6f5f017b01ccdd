use thiserror::Error;

/// Failure kinds of a single bounded decompression call.
///
/// A call either decodes the whole stream or fails with exactly one of these;
/// there is no partial-success state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressionError {
    /// The destination is too small for the fully decoded stream.
    #[error("Output buffer too small for the decoded stream")]
    InsufficientCapacity,

    /// Malformed header, bad checksum, truncated body, or a decoder that
    /// could not be set up.
    #[error("Invalid or corrupt gzip stream")]
    InvalidStream,
}

impl DecompressionError {
    /// Integer code used at the C boundary.
    pub const fn code(self) -> i32 {
        match self {
            Self::InsufficientCapacity => -2,
            Self::InvalidStream => -1,
        }
    }

    /// `true` when retrying with a larger destination can succeed.
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::InsufficientCapacity)
    }
}

/// Failures of the growing-buffer helper.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandError {
    /// The stream is invalid; retrying cannot help.
    #[error("Corrupt gzip data")]
    Corrupt,

    /// The decoded data does not fit in the configured `max_output`.
    #[error("Decoded stream exceeds the {limit} byte output limit")]
    LimitExceeded { limit: usize },
}
