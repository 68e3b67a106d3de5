//! Chunk and ECC block boundaries of a protected buffer
//!
//! A protected buffer is the message followed by one ECC block per chunk:
//!
//! ```text
//! | chunk 0 | chunk 1 | ... | chunk n-1 | ecc 0 | ecc 1 | ... | ecc n-1 |
//! ```
//!
//! Every chunk is `chunk_size` bytes except the last, which may be shorter.
//! Every ECC block is exactly `ecc_len` bytes. Neither parameter is stored in
//! the buffer, so decoding must replay the same arithmetic used to encode.

use std::ops::Range;

/// Boundaries of every chunk and ECC block for one message length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    message_len: usize,
    chunk_size: usize,
    ecc_len: usize,
    chunks: usize,
}

impl Layout {
    /// Layout produced by encoding a `message_len`-byte message
    pub fn for_message(message_len: usize, chunk_size: usize, ecc_len: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            message_len,
            chunk_size,
            ecc_len,
            chunks: message_len.div_ceil(chunk_size),
        }
    }

    /// Recover the layout from the length of a protected buffer.
    ///
    /// Returns `None` when no non-empty message length encodes to `total_len`
    /// bytes with these parameters.
    pub fn from_encoded_len(total_len: usize, chunk_size: usize, ecc_len: usize) -> Option<Self> {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        let stride = chunk_size + ecc_len;
        let full_chunks = total_len / stride;
        let tail = total_len % stride;

        let message_len = match tail {
            0 => full_chunks * chunk_size,
            // A trailing partial chunk needs at least one data byte
            t if t > ecc_len => full_chunks * chunk_size + (t - ecc_len),
            _ => return None,
        };

        if message_len == 0 {
            return None;
        }

        Some(Self::for_message(message_len, chunk_size, ecc_len))
    }

    pub fn message_len(&self) -> usize {
        self.message_len
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn ecc_len(&self) -> usize {
        self.ecc_len
    }

    /// Number of chunks (and ECC blocks)
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    /// Total bytes of ECC appended after the message
    pub fn ecc_total_len(&self) -> usize {
        self.chunks * self.ecc_len
    }

    /// Length of the whole protected buffer
    pub fn encoded_len(&self) -> usize {
        self.message_len + self.ecc_total_len()
    }

    /// Size of chunk `index`, handling the last partial chunk
    pub fn chunk_len(&self, index: usize) -> usize {
        debug_assert!(index < self.chunks);
        if index == self.chunks - 1 {
            let remaining = self.message_len % self.chunk_size;
            if remaining == 0 {
                self.chunk_size
            } else {
                remaining
            }
        } else {
            self.chunk_size
        }
    }

    /// Byte range of chunk `index` within the buffer
    pub fn chunk_range(&self, index: usize) -> Range<usize> {
        let start = index * self.chunk_size;
        start..start + self.chunk_len(index)
    }

    /// Byte range of ECC block `index` within the buffer
    pub fn ecc_range(&self, index: usize) -> Range<usize> {
        let start = self.message_len + index * self.ecc_len;
        start..start + self.ecc_len
    }

    /// `(chunk_range, ecc_range)` for every chunk, in order
    pub fn blocks(&self) -> impl Iterator<Item = (Range<usize>, Range<usize>)> + '_ {
        (0..self.chunks).map(move |i| (self.chunk_range(i), self.ecc_range(i)))
    }
}
