//! Reed-Solomon error correction for a single codeword
//!
//! Decoding runs a fixed sequence of stages over one `data ‖ ECC` codeword:
//!
//! 1. Syndromes: evaluate the received polynomial at `2^0..2^(nsym-1)`.
//!    All zero means the codeword is clean.
//! 2. Error locator (Berlekamp-Massey) over the shifted syndromes.
//! 3. Error positions (Chien search) from the reversed locator.
//! 4. Errata locator and error evaluator from the positions.
//! 5. Error magnitudes (Forney), applied to the codeword.
//! 6. Syndromes are recomputed and must all be zero.
//!
//! Only symbol errors at unknown positions are handled. A codeword with
//! `e` errors is corrected when `2e <= nsym`.

use super::poly::Poly;
use super::types::{CodewordStatus, MAX_CODEWORD_LEN, MAX_ECC_SYMBOLS};
use crate::error::CodewordError;
use crate::galois::{gf_div, gf_inverse, gf_mul, gf_pow};
use log::trace;
use std::ops::Deref;

/// Most errors any codeword can have corrected
const MAX_ERRORS: usize = MAX_ECC_SYMBOLS / 2;

/// Located error positions, indices into the codeword
#[derive(Debug, Clone, Copy)]
pub struct ErrorPositions {
    positions: [usize; MAX_ERRORS],
    len: usize,
}

impl ErrorPositions {
    fn new() -> Self {
        Self {
            positions: [0; MAX_ERRORS],
            len: 0,
        }
    }

    fn try_push(&mut self, position: usize) -> bool {
        if self.len == MAX_ERRORS {
            return false;
        }
        self.positions[self.len] = position;
        self.len += 1;
        true
    }
}

impl Deref for ErrorPositions {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.positions[..self.len]
    }
}

/// Syndrome vector of length `ecc_len + 1`; index 0 is always zero and
/// index `k` is the codeword evaluated at `2^(k-1)`.
pub fn calc_syndromes(received: &Poly, ecc_len: usize) -> Poly {
    let mut synd = Poly::zeroed(ecc_len + 1);
    for k in 1..=ecc_len {
        synd[k] = received.eval(gf_pow(2, (k - 1) as i32));
    }
    synd
}

#[inline]
fn has_errors(synd: &Poly) -> bool {
    synd.iter().skip(1).any(|&s| s != 0)
}

/// Berlekamp-Massey over the shifted syndromes (index 0 dropped)
pub fn find_error_locator(forney: &Poly, ecc_len: usize) -> Result<Poly, CodewordError> {
    let mut err_loc = Poly::one();
    let mut old_loc = Poly::one();

    for i in 0..ecc_len {
        // Discrepancy between the syndrome and what the current locator predicts
        let mut delta = forney[i];
        for j in 1..err_loc.len() {
            delta ^= gf_mul(err_loc[err_loc.len() - 1 - j], forney[i - j]);
        }

        old_loc.push(0);

        if delta != 0 {
            if old_loc.len() > err_loc.len() {
                let new_loc = old_loc.scale(delta);
                old_loc = err_loc.scale(gf_inverse(delta));
                err_loc = new_loc;
            }
            err_loc = &err_loc + &old_loc.scale(delta);
        }
    }

    err_loc.trim_leading_zeros();

    let errors = err_loc.degree();
    if errors * 2 > ecc_len {
        return Err(CodewordError::TooManyErrors { errors, ecc_len });
    }

    Ok(err_loc)
}

/// Chien search: positions where the reversed locator has a root
pub fn find_errors(
    reversed_locator: &Poly,
    codeword_len: usize,
) -> Result<ErrorPositions, CodewordError> {
    let expected = reversed_locator.degree();
    let mut positions = ErrorPositions::new();
    let mut found = 0;

    for i in 0..codeword_len {
        if reversed_locator.eval(gf_pow(2, i as i32)) == 0 {
            found += 1;
            if !positions.try_push(codeword_len - 1 - i) {
                break;
            }
        }
    }

    if found != expected {
        return Err(CodewordError::LocatorMismatch { found, expected });
    }

    Ok(positions)
}

/// Product of `(1 + 2^p·x)` over the coefficient index `p` of every position
pub fn find_errata_locator(positions: &[usize], codeword_len: usize) -> Poly {
    let mut errata_loc = Poly::one();
    for &pos in positions {
        let factor = Poly::from_slice(&[gf_pow(2, (codeword_len - 1 - pos) as i32), 1]);
        errata_loc = &errata_loc * &factor;
    }
    errata_loc
}

/// `Ω(x) = S(x)·Λ(x) mod x^(deg Λ + 1)`, with `S` the reversed syndromes
pub fn find_error_evaluator(reversed_synd: &Poly, errata_loc: &Poly) -> Poly {
    let product = reversed_synd * errata_loc;

    let mut divisor = Poly::one();
    divisor.extend_zeros(errata_loc.len());

    let (_, remainder) = product.div_rem(&divisor);
    remainder
}

/// Forney magnitudes for every position, as a correction vector the length of
/// the codeword
fn error_magnitudes(
    synd: &Poly,
    positions: &[usize],
    codeword_len: usize,
) -> Result<Poly, CodewordError> {
    let errata_loc = find_errata_locator(positions, codeword_len);
    let evaluator = find_error_evaluator(&synd.reversed(), &errata_loc);

    let locator_value = |pos: usize| gf_pow(2, (codeword_len - 1 - pos) as i32);

    let mut correction = Poly::zeroed(codeword_len);
    for (i, &pos) in positions.iter().enumerate() {
        let x_i = locator_value(pos);
        let x_i_inv = gf_inverse(x_i);

        // Formal derivative of the errata locator at X_i^-1, without the X_i factor
        let mut denominator = 1u8;
        for (j, &other) in positions.iter().enumerate() {
            if j != i {
                denominator = gf_mul(denominator, 1 ^ gf_mul(x_i_inv, locator_value(other)));
            }
        }
        if denominator == 0 {
            return Err(CodewordError::ZeroDenominator { position: pos });
        }

        let numerator = gf_mul(x_i, evaluator.eval(x_i_inv));
        correction[pos] ^= gf_div(numerator, denominator);
    }

    Ok(correction)
}

/// Returns true if `codeword` has all-zero syndromes
pub fn is_codeword_clean(codeword: &[u8], ecc_len: usize) -> bool {
    check_codeword_shape(codeword, ecc_len);
    !has_errors(&calc_syndromes(&Poly::from_slice(codeword), ecc_len))
}

fn check_codeword_shape(codeword: &[u8], ecc_len: usize) {
    assert!(
        ecc_len > 0 && ecc_len <= MAX_ECC_SYMBOLS,
        "ECC length {} outside 1..={}",
        ecc_len,
        MAX_ECC_SYMBOLS
    );
    assert!(
        codeword.len() > ecc_len && codeword.len() <= MAX_CODEWORD_LEN,
        "codeword length {} invalid for {} ECC symbols",
        codeword.len(),
        ecc_len
    );
}

/// Decode one `data ‖ ECC` codeword in place.
///
/// On success the codeword holds the corrected symbols. On failure it is left
/// exactly as received.
///
/// # Panics
/// Panics if `ecc_len` is zero or above [`MAX_ECC_SYMBOLS`], or if the codeword
/// has no data symbols or exceeds 255 symbols.
pub fn decode_codeword(
    codeword: &mut [u8],
    ecc_len: usize,
) -> Result<CodewordStatus, CodewordError> {
    check_codeword_shape(codeword, ecc_len);

    let received = Poly::from_slice(codeword);
    let synd = calc_syndromes(&received, ecc_len);
    if !has_errors(&synd) {
        return Ok(CodewordStatus::Clean);
    }
    trace!("syndromes nonzero: {:?}", synd);

    let forney = Poly::from_slice(&synd[1..]);
    let err_loc = find_error_locator(&forney, ecc_len)?;
    trace!("error locator of degree {}", err_loc.degree());

    let positions = find_errors(&err_loc.reversed(), codeword.len())?;
    trace!("error positions {:?}", &*positions);

    let correction = error_magnitudes(&synd, &positions, codeword.len())?;
    let corrected = &received + &correction;

    if has_errors(&calc_syndromes(&corrected, ecc_len)) {
        return Err(CodewordError::VerificationFailed);
    }

    let repaired = correction.iter().filter(|&&c| c != 0).count();
    codeword.copy_from_slice(&corrected);
    Ok(CodewordStatus::Corrected(repaired))
}
