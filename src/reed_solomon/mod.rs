//! Reed-Solomon Error Correction Module
//!
//! Single-codeword Reed-Solomon coding over GF(2^8): fixed-capacity polynomial
//! algebra, systematic encoding and error-only decoding. Chunking of longer
//! messages lives in [`crate::codec`].

pub mod decoder;
pub mod encoder;
pub mod poly;
pub mod types;

pub use decoder::{decode_codeword, is_codeword_clean};
pub use encoder::{encode_block, generator_poly};
pub use poly::Poly;
pub use types::*;
