//! Error types for arithmetic coding.

use thiserror::Error;

/// Error variants for arithmetic coding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Symbol is outside the 257-symbol alphabet.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(u16),

    /// Cumulative offset does not fall inside the model's total frequency.
    #[error("cumulative offset {offset} out of range for total frequency {total}")]
    OffsetOutOfRange {
        /// Requested offset.
        offset: u32,
        /// Total frequency of the model at the time of the lookup.
        total: u32,
    },

    /// The decoder consumed every real and synthetic bit without reaching
    /// the end-of-stream symbol.
    #[error("input exhausted before end-of-stream symbol")]
    InputExhausted,

    /// An I/O error occurred while reading or writing a stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for arithmetic coding operations.
pub type Result<T> = std::result::Result<T, Error>;
