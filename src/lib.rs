//! Reed-Solomon forward error correction over GF(2^8)
//!
//! Protects an arbitrary byte message by splitting it into chunks and
//! appending `ecc_len` Reed-Solomon check symbols per chunk. Up to
//! `ecc_len / 2` corrupted bytes per chunk (data or ECC) can be corrected at
//! unknown positions. The codec never allocates and holds no mutable state.
//!
//! # Example
//!
//! ```
//! let message = b"HelloWorld!";
//! let mut buffer = message.to_vec();
//! let mut ecc = [0u8; 4];
//! let written = rsecc::encode(message, 4, 11, &mut ecc);
//! buffer.extend_from_slice(&ecc[..written]);
//!
//! buffer[2] ^= 0xff;
//! buffer[13] ^= 0x01;
//!
//! let len = rsecc::decode(&mut buffer, 4, 11).unwrap();
//! assert_eq!(&buffer[..len], message);
//! ```

pub mod codec;
pub mod error;
pub mod galois;
pub mod layout;
pub mod reed_solomon;

pub use codec::{Codec, DecodeReport, VerifyReport};
pub use error::{CodewordError, ConfigError, DecodeError};
pub use layout::Layout;
pub use reed_solomon::{CodewordStatus, MAX_CHUNK_SIZE, MAX_CODEWORD_LEN, MAX_ECC_SYMBOLS};

fn codec_or_panic(ecc_len: usize, chunk_size: usize) -> Codec {
    Codec::new(ecc_len, chunk_size).unwrap_or_else(|e| panic!("invalid codec parameters: {}", e))
}

/// Compute the ECC blocks of `message` into `ecc_out`, returning the number of
/// ECC bytes written (`chunk count × ecc_len`).
///
/// # Panics
/// Parameter and buffer violations are caller bugs and panic: empty message,
/// `ecc_len`/`chunk_size` outside their limits, a chunk plus its ECC longer than
/// 255 bytes, or `ecc_out` too small.
pub fn encode(message: &[u8], ecc_len: usize, chunk_size: usize, ecc_out: &mut [u8]) -> usize {
    codec_or_panic(ecc_len, chunk_size).encode(message, ecc_out)
}

/// Correct `buffer` (message followed by its ECC blocks) in place and return
/// the message length.
///
/// `ecc_len` and `chunk_size` must match the values used to encode.
///
/// # Panics
/// Panics on invalid `ecc_len`/`chunk_size`, as [`encode`] does.
pub fn decode(buffer: &mut [u8], ecc_len: usize, chunk_size: usize) -> Result<usize, DecodeError> {
    codec_or_panic(ecc_len, chunk_size)
        .decode(buffer)
        .map(|report| report.decoded_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reports_ecc_length() {
        let mut ecc = [0u8; 16];
        assert_eq!(encode(b"HelloWorld!", 4, 11, &mut ecc), 4);
        assert_eq!(&ecc[..4], &[0x5f, 0x6c, 0xc3, 0xd1]);
        assert_eq!(encode(b"HelloWorld!", 4, 3, &mut ecc), 16);
    }

    #[test]
    #[should_panic(expected = "empty message")]
    fn test_encode_empty_message() {
        let mut ecc = [0u8; 4];
        encode(b"", 4, 11, &mut ecc);
    }

    #[test]
    #[should_panic(expected = "invalid codec parameters")]
    fn test_encode_codeword_too_long() {
        let mut ecc = [0u8; 33];
        encode(&[0u8; 223], 33, 223, &mut ecc);
    }

    #[test]
    fn test_decode_returns_message_length() {
        let message = [0x42u8; 30];
        let mut ecc = [0u8; 12];
        let written = encode(&message, 4, 10, &mut ecc);

        let mut buffer = message.to_vec();
        buffer.extend_from_slice(&ecc[..written]);
        buffer[29] = 0;

        assert_eq!(decode(&mut buffer, 4, 10), Ok(30));
        assert_eq!(&buffer[..30], &message[..]);
    }
}
