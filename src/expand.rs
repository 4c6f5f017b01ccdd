use crate::decompress::decompress;
use crate::error::{DecompressionError, ExpandError};
use crate::trailer::size_hint;

// --- Constants ---

/// First capacity tried when the trailer gives no usable hint.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;

/// Ceiling on the decoded size accepted by [`decompress_to_vec`].
pub const DEFAULT_MAX_OUTPUT: usize = 64 * 1024 * 1024;

/// Deflate cannot expand data by more than this factor, so a trailer hint
/// above `input.len() * MAX_EXPANSION` is never believed.
const MAX_EXPANSION: usize = 1032;

/// Tuning for the grow-and-retry helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Capacity of the first attempt when no hint is used.
    pub initial_capacity: usize,
    /// Largest buffer the helper will allocate.
    pub max_output: usize,
    /// Start from the ISIZE trailer field instead of `initial_capacity`.
    pub use_size_hint: bool,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_output: DEFAULT_MAX_OUTPUT,
            use_size_hint: true,
        }
    }
}

impl ExpandConfig {
    /// Sets the capacity of the first attempt when no hint is used.
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the largest buffer the helper may allocate.
    #[must_use]
    pub const fn with_max_output(mut self, limit: usize) -> Self {
        self.max_output = limit;
        self
    }

    /// Enables or disables sizing the first attempt from the trailer.
    #[must_use]
    pub const fn with_size_hint(mut self, enabled: bool) -> Self {
        self.use_size_hint = enabled;
        self
    }

    /// Upper bound actually enforced; a zero limit is treated as one byte.
    const fn limit(&self) -> usize {
        if self.max_output == 0 { 1 } else { self.max_output }
    }

    fn first_capacity(&self, input: &[u8]) -> usize {
        let guess = if self.use_size_hint {
            size_hint(input)
                .map(|hint| hint.min(input.len().saturating_mul(MAX_EXPANSION)))
                .unwrap_or(self.initial_capacity)
        } else {
            self.initial_capacity
        };
        guess.clamp(1, self.limit())
    }
}

/// Decompresses a whole gzip member into a fresh `Vec` using the default
/// [`ExpandConfig`].
pub fn decompress_to_vec(input: &[u8]) -> Result<Vec<u8>, ExpandError> {
    decompress_to_vec_with(input, &ExpandConfig::default())
}

/// Decompresses a whole gzip member, growing the destination until it fits.
///
/// Every attempt is a complete, independent call to [`decompress`]: the
/// buffer is doubled (up to `config.max_output`) after each
/// [`DecompressionError::InsufficientCapacity`] and the stream is decoded
/// again from the start.
///
/// # Errors
/// * [`ExpandError::Corrupt`] as soon as the stream is found invalid.
/// * [`ExpandError::LimitExceeded`] if the data does not fit in
///   `config.max_output` bytes.
pub fn decompress_to_vec_with(
    input: &[u8],
    config: &ExpandConfig,
) -> Result<Vec<u8>, ExpandError> {
    let limit = config.limit();
    let mut capacity = config.first_capacity(input);
    let mut output = Vec::new();

    loop {
        output.clear();
        output.resize(capacity, 0);

        match decompress(input, &mut output) {
            Ok(written) => {
                output.truncate(written);
                return Ok(output);
            }
            Err(DecompressionError::InvalidStream) => {
                log::warn!("gunzip: corrupt stream ({} bytes)", input.len());
                return Err(ExpandError::Corrupt);
            }
            Err(DecompressionError::InsufficientCapacity) => {
                if capacity >= limit {
                    log::warn!("gunzip: output exceeds {limit} byte limit");
                    return Err(ExpandError::LimitExceeded { limit });
                }
                let next = capacity.saturating_mul(2).min(limit);
                log::debug!("gunzip: {capacity} bytes too small, retrying with {next}");
                capacity = next;
            }
        }
    }
}
