//! Error types for codec configuration and decoding
//!
//! Caller bugs (empty messages, undersized output buffers, capacity overflow)
//! are not represented here: they panic. These types cover the outcomes a
//! caller is expected to handle.

use thiserror::Error;

/// Invalid `(ecc_len, chunk_size)` parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// ECC length of zero
    #[error("ECC length must be non-zero")]
    ZeroEccLength,

    /// ECC length above the compiled-in maximum
    #[error("ECC length {ecc_len} exceeds maximum {max}")]
    EccLengthTooLarge { ecc_len: usize, max: usize },

    /// Chunk size of zero
    #[error("Chunk size must be non-zero")]
    ZeroChunkSize,

    /// Chunk size above the compiled-in maximum
    #[error("Chunk size {chunk_size} exceeds maximum {max}")]
    ChunkSizeTooLarge { chunk_size: usize, max: usize },

    /// Data plus ECC does not fit in one GF(2^8) codeword
    #[error("Codeword of {chunk_size} data + {ecc_len} ECC bytes exceeds {max} symbols")]
    CodewordTooLong {
        chunk_size: usize,
        ecc_len: usize,
        max: usize,
    },
}

/// Why a single codeword could not be corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodewordError {
    /// Error locator degree exceeds what the ECC symbols can correct
    #[error("Error locator implies {errors} errors, more than {ecc_len} ECC symbols can correct")]
    TooManyErrors { errors: usize, ecc_len: usize },

    /// Root search disagrees with the locator degree
    #[error("Root search found {found} error positions, expected {expected}")]
    LocatorMismatch { found: usize, expected: usize },

    /// Magnitude solving hit a zero denominator
    #[error("Zero denominator solving error magnitude at position {position}")]
    ZeroDenominator { position: usize },

    /// Syndromes still nonzero after applying corrections
    #[error("Syndromes nonzero after correction")]
    VerificationFailed,
}

/// Errors from decoding a chunked buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A chunk could not be corrected; later chunks were left untouched
    #[error("Chunk {chunk} is uncorrectable: {source}")]
    Uncorrectable {
        chunk: usize,
        #[source]
        source: CodewordError,
    },

    /// The buffer length cannot result from encoding with these parameters
    #[error(
        "Buffer of {total_len} bytes is not a valid layout for {ecc_len} ECC bytes per {chunk_size}-byte chunk"
    )]
    InvalidLayout {
        total_len: usize,
        ecc_len: usize,
        chunk_size: usize,
    },
}
