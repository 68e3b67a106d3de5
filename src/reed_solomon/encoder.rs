//! Systematic Reed-Solomon encoding
//!
//! The ECC block of a data chunk is the remainder of `data(x) · x^nsym`
//! divided by the generator `g(x) = Π (x - 2^i)` for `i` in `0..nsym`.

use super::poly::Poly;
use super::types::{MAX_CODEWORD_LEN, MAX_ECC_SYMBOLS};
use crate::galois::gf_pow;

/// Build the degree-`ecc_len` generator polynomial with roots `2^0..2^(ecc_len-1)`
///
/// # Panics
/// Panics if `ecc_len` is zero or exceeds [`MAX_ECC_SYMBOLS`].
pub fn generator_poly(ecc_len: usize) -> Poly {
    assert!(
        ecc_len > 0 && ecc_len <= MAX_ECC_SYMBOLS,
        "ECC length {} outside 1..={}",
        ecc_len,
        MAX_ECC_SYMBOLS
    );

    let mut generator = Poly::one();
    for i in 0..ecc_len {
        let factor = Poly::from_slice(&[1, gf_pow(2, i as i32)]);
        generator = &generator * &factor;
    }
    generator
}

/// Compute the ECC block for `data` into `ecc_out`.
///
/// `ecc_out` must be exactly `generator.len() - 1` bytes.
///
/// # Panics
/// Panics if `data` is empty, the codeword would exceed 255 symbols, or
/// `ecc_out` has the wrong length.
pub fn encode_block(generator: &Poly, data: &[u8], ecc_out: &mut [u8]) {
    let ecc_len = generator.degree();
    assert!(!data.is_empty(), "cannot encode an empty chunk");
    assert!(
        data.len() + ecc_len <= MAX_CODEWORD_LEN,
        "codeword of {} data + {} ECC symbols exceeds {}",
        data.len(),
        ecc_len,
        MAX_CODEWORD_LEN
    );
    assert_eq!(ecc_out.len(), ecc_len, "ECC output must hold exactly {} bytes", ecc_len);

    let mut shifted = Poly::from_slice(data);
    shifted.extend_zeros(ecc_len);

    let (_, remainder) = shifted.div_rem(generator);
    ecc_out.copy_from_slice(&remainder);
}
