//! Chunked Reed-Solomon encoding and decoding of arbitrary-length messages
//!
//! A [`Codec`] carries validated `(ecc_len, chunk_size)` parameters and the
//! generator polynomial for `ecc_len`. Messages are split into chunks of
//! `chunk_size` bytes (the last may be shorter) and each chunk is coded as an
//! independent codeword. See [`crate::layout`] for the buffer format.

use crate::error::{ConfigError, DecodeError};
use crate::layout::Layout;
use crate::reed_solomon::{
    decode_codeword, encode_block, generator_poly, is_codeword_clean, Poly, MAX_CHUNK_SIZE,
    MAX_CODEWORD_LEN, MAX_ECC_SYMBOLS,
};
use log::debug;

/// Summary of a successful [`Codec::decode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeReport {
    /// Length of the recovered message at the front of the buffer
    pub decoded_len: usize,
    pub chunks: usize,
    /// Chunks that needed at least one correction
    pub corrected_chunks: usize,
    /// Symbols repaired across all chunks, data and ECC alike
    pub corrected_symbols: usize,
}

impl DecodeReport {
    /// True if nothing had to be corrected
    pub fn is_clean(&self) -> bool {
        self.corrected_chunks == 0
    }
}

/// Summary of a read-only [`Codec::verify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifyReport {
    pub message_len: usize,
    pub chunks: usize,
    /// Chunks whose syndromes are nonzero
    pub damaged_chunks: usize,
}

impl VerifyReport {
    pub fn is_intact(&self) -> bool {
        self.damaged_chunks == 0
    }
}

/// Validated codec parameters plus the generator polynomial they imply
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    ecc_len: usize,
    chunk_size: usize,
    generator: Poly,
}

impl Codec {
    /// Validate the parameters and build the generator polynomial
    pub fn new(ecc_len: usize, chunk_size: usize) -> Result<Self, ConfigError> {
        if ecc_len == 0 {
            return Err(ConfigError::ZeroEccLength);
        }
        if ecc_len > MAX_ECC_SYMBOLS {
            return Err(ConfigError::EccLengthTooLarge {
                ecc_len,
                max: MAX_ECC_SYMBOLS,
            });
        }
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::ChunkSizeTooLarge {
                chunk_size,
                max: MAX_CHUNK_SIZE,
            });
        }
        if chunk_size + ecc_len > MAX_CODEWORD_LEN {
            return Err(ConfigError::CodewordTooLong {
                chunk_size,
                ecc_len,
                max: MAX_CODEWORD_LEN,
            });
        }

        Ok(Self {
            ecc_len,
            chunk_size,
            generator: generator_poly(ecc_len),
        })
    }

    pub fn ecc_len(&self) -> usize {
        self.ecc_len
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Generator polynomial shared by every chunk
    pub fn generator(&self) -> &Poly {
        &self.generator
    }

    /// Layout of the protected buffer for a `message_len`-byte message
    pub fn layout(&self, message_len: usize) -> Layout {
        Layout::for_message(message_len, self.chunk_size, self.ecc_len)
    }

    pub fn chunk_count(&self, message_len: usize) -> usize {
        self.layout(message_len).chunk_count()
    }

    /// ECC bytes [`Codec::encode`] writes for a `message_len`-byte message
    pub fn ecc_total_len(&self, message_len: usize) -> usize {
        self.layout(message_len).ecc_total_len()
    }

    /// Message plus ECC length
    pub fn encoded_len(&self, message_len: usize) -> usize {
        self.layout(message_len).encoded_len()
    }

    /// Encode `message`, writing the concatenated ECC blocks to the front of
    /// `ecc_out`. Returns the number of ECC bytes written.
    ///
    /// # Panics
    /// Panics if `message` is empty or `ecc_out` is shorter than
    /// [`Codec::ecc_total_len`].
    pub fn encode(&self, message: &[u8], ecc_out: &mut [u8]) -> usize {
        assert!(!message.is_empty(), "cannot encode an empty message");
        let layout = self.layout(message.len());
        assert!(
            ecc_out.len() >= layout.ecc_total_len(),
            "ECC buffer holds {} bytes, {} chunks need {}",
            ecc_out.len(),
            layout.chunk_count(),
            layout.ecc_total_len()
        );

        for (chunk, ecc) in message
            .chunks(self.chunk_size)
            .zip(ecc_out.chunks_exact_mut(self.ecc_len))
        {
            encode_block(&self.generator, chunk, ecc);
        }

        debug!(
            "encoded {} bytes as {} chunks, {} ECC bytes",
            message.len(),
            layout.chunk_count(),
            layout.ecc_total_len()
        );
        layout.ecc_total_len()
    }

    /// Recover the layout of a protected buffer of `total_len` bytes
    pub fn layout_of_encoded(&self, total_len: usize) -> Result<Layout, DecodeError> {
        Layout::from_encoded_len(total_len, self.chunk_size, self.ecc_len).ok_or(
            DecodeError::InvalidLayout {
                total_len,
                ecc_len: self.ecc_len,
                chunk_size: self.chunk_size,
            },
        )
    }

    /// Correct a protected buffer (message followed by its ECC blocks) in
    /// place.
    ///
    /// Chunks are processed in order. On the first uncorrectable chunk,
    /// decoding stops: earlier chunks stay corrected, that chunk and every
    /// later one are left as received.
    pub fn decode(&self, buffer: &mut [u8]) -> Result<DecodeReport, DecodeError> {
        let layout = self.layout_of_encoded(buffer.len())?;
        let mut report = DecodeReport {
            decoded_len: 0,
            chunks: layout.chunk_count(),
            ..Default::default()
        };

        let mut codeword = [0u8; MAX_CODEWORD_LEN];
        for (index, (data, ecc)) in layout.blocks().enumerate() {
            let data_len = data.len();
            let cw = &mut codeword[..data_len + self.ecc_len];
            cw[..data_len].copy_from_slice(&buffer[data.clone()]);
            cw[data_len..].copy_from_slice(&buffer[ecc.clone()]);

            let status = decode_codeword(cw, self.ecc_len).map_err(|source| {
                debug!("chunk {} uncorrectable: {}", index, source);
                DecodeError::Uncorrectable {
                    chunk: index,
                    source,
                }
            })?;

            let repaired = status.corrected_symbols();
            if repaired > 0 {
                debug!("chunk {}: corrected {} symbols", index, repaired);
                buffer[data].copy_from_slice(&cw[..data_len]);
                buffer[ecc].copy_from_slice(&cw[data_len..]);
                report.corrected_chunks += 1;
                report.corrected_symbols += repaired;
            }
            report.decoded_len += data_len;
        }

        Ok(report)
    }

    /// Check every chunk of a protected buffer without correcting anything
    pub fn verify(&self, buffer: &[u8]) -> Result<VerifyReport, DecodeError> {
        let layout = self.layout_of_encoded(buffer.len())?;
        let mut report = VerifyReport {
            message_len: layout.message_len(),
            chunks: layout.chunk_count(),
            damaged_chunks: 0,
        };

        let mut codeword = [0u8; MAX_CODEWORD_LEN];
        for (index, (data, ecc)) in layout.blocks().enumerate() {
            let data_len = data.len();
            let cw = &mut codeword[..data_len + self.ecc_len];
            cw[..data_len].copy_from_slice(&buffer[data]);
            cw[data_len..].copy_from_slice(&buffer[ecc]);

            if !is_codeword_clean(cw, self.ecc_len) {
                debug!("chunk {} damaged", index);
                report.damaged_chunks += 1;
            }
        }

        Ok(report)
    }
}
