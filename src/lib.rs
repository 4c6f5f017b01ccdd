//! # Bounded gzip decompression
//!
//! `bounded_gunzip` decodes a complete gzip member into a caller-owned,
//! fixed-capacity buffer in one call. The output slice is never written past
//! its end and never grown; a call either decodes the whole stream or reports
//! whether a bigger buffer would help.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Write;
//!
//! use bounded_gunzip::{DecompressionError, decompress};
//! use flate2::{Compression, write::GzEncoder};
//!
//! let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
//! encoder.write_all(b"dive-log-42").unwrap();
//! let compressed = encoder.finish().unwrap();
//!
//! let mut buffer = [0u8; 11];
//! assert_eq!(decompress(&compressed, &mut buffer), Ok(11));
//! assert_eq!(&buffer, b"dive-log-42");
//!
//! let mut small = [0u8; 5];
//! assert_eq!(
//!     decompress(&compressed, &mut small),
//!     Err(DecompressionError::InsufficientCapacity)
//! );
//! ```
//!
//! Callers that do not know the decoded size up front can use
//! [`decompress_to_vec`], which retries with a growing buffer.

#![cfg_attr(not(feature = "c-abi"), forbid(unsafe_code))]

#[cfg(feature = "c-abi")]
pub mod abi;
pub mod decompress;
pub mod error;
pub mod expand;
pub mod trailer;

pub use decompress::{decompress, status_code};
pub use error::{DecompressionError, ExpandError};
pub use expand::{ExpandConfig, decompress_to_vec, decompress_to_vec_with};
pub use trailer::{GzipTrailer, size_hint, trailer};
