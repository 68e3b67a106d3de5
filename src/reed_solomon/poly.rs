//! Fixed-capacity polynomials over GF(2^8)
//!
//! Coefficients are stored most-significant first: `[a, b, c]` is
//! `a·x² + b·x + c`. Every polynomial lives in an inline array of
//! [`POLY_CAPACITY`] bytes, so the codec never allocates. Any operation whose
//! result would not fit panics; that is a caller bug, not a data fault.

use super::types::POLY_CAPACITY;
use crate::galois::{gf_div, gf_mul};
use std::fmt;
use std::ops::{Add, Deref, DerefMut, Mul};

/// Polynomial with inline, bounded coefficient storage
#[derive(Clone, Copy)]
pub struct Poly {
    coeffs: [u8; POLY_CAPACITY],
    len: usize,
}

#[inline]
fn check_capacity(len: usize) {
    assert!(
        len <= POLY_CAPACITY,
        "polynomial length {} exceeds capacity {}",
        len,
        POLY_CAPACITY
    );
}

impl Poly {
    /// Empty polynomial
    pub const fn new() -> Self {
        Self {
            coeffs: [0; POLY_CAPACITY],
            len: 0,
        }
    }

    /// The constant polynomial `1`
    pub fn one() -> Self {
        Self::from_slice(&[1])
    }

    /// `len` zero coefficients
    pub fn zeroed(len: usize) -> Self {
        check_capacity(len);
        Self {
            coeffs: [0; POLY_CAPACITY],
            len,
        }
    }

    pub fn from_slice(coeffs: &[u8]) -> Self {
        let mut p = Self::zeroed(coeffs.len());
        p.coeffs[..coeffs.len()].copy_from_slice(coeffs);
        p
    }

    /// Copy of `coeffs` with the coefficient order reversed
    pub fn from_slice_reversed(coeffs: &[u8]) -> Self {
        let mut p = Self::zeroed(coeffs.len());
        for (dst, &src) in p.coeffs.iter_mut().zip(coeffs.iter().rev()) {
            *dst = src;
        }
        p
    }

    pub const fn capacity(&self) -> usize {
        POLY_CAPACITY
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.coeffs[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.coeffs[..self.len]
    }

    /// Append a least-significant coefficient (multiplies by x, then adds `c`)
    pub fn push(&mut self, c: u8) {
        check_capacity(self.len + 1);
        self.coeffs[self.len] = c;
        self.len += 1;
    }

    /// Append `count` zero coefficients (multiplies by x^count)
    pub fn extend_zeros(&mut self, count: usize) {
        check_capacity(self.len + count);
        self.coeffs[self.len..self.len + count].fill(0);
        self.len += count;
    }

    /// Degree of the polynomial, counting from the first stored coefficient
    pub fn degree(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Drop leading zero coefficients
    pub fn trim_leading_zeros(&mut self) {
        let shift = self.as_slice().iter().take_while(|&&c| c == 0).count();
        if shift > 0 {
            self.coeffs.copy_within(shift..self.len, 0);
            self.len -= shift;
        }
    }

    /// Multiply every coefficient by `scalar`
    pub fn scale(&self, scalar: u8) -> Poly {
        let mut out = *self;
        for c in out.as_mut_slice() {
            *c = gf_mul(*c, scalar);
        }
        out
    }

    /// Coefficient-order reversal
    pub fn reversed(&self) -> Poly {
        Self::from_slice_reversed(self.as_slice())
    }

    /// Horner evaluation at `x`
    pub fn eval(&self, x: u8) -> u8 {
        let mut coeffs = self.as_slice().iter();
        let Some(&first) = coeffs.next() else {
            return 0;
        };
        coeffs.fold(first, |y, &c| gf_mul(y, x) ^ c)
    }

    /// Synthetic division, returning `(quotient, remainder)`.
    ///
    /// The remainder always has `divisor.len() - 1` coefficients.
    ///
    /// # Panics
    /// Panics if the divisor is empty or its leading coefficient is zero.
    pub fn div_rem(&self, divisor: &Poly) -> (Poly, Poly) {
        assert!(!divisor.is_empty(), "division by an empty polynomial");
        let rem_len = divisor.len() - 1;

        if self.len() < divisor.len() {
            let mut remainder = Poly::zeroed(rem_len - self.len());
            for &c in self.iter() {
                remainder.push(c);
            }
            return (Poly::new(), remainder);
        }

        let normalizer = divisor[0];
        let sep = self.len() - rem_len;
        let mut out = *self;

        for i in 0..sep {
            out[i] = gf_div(out[i], normalizer);
            let coef = out[i];
            if coef != 0 {
                for (j, &d) in divisor.iter().enumerate().skip(1) {
                    if d != 0 {
                        out[i + j] ^= gf_mul(d, coef);
                    }
                }
            }
        }

        (
            Poly::from_slice(&out[..sep]),
            Poly::from_slice(&out[sep..]),
        )
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Poly {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl DerefMut for Poly {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Poly {}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Poly").field(&self.as_slice()).finish()
    }
}

// Addition aligns at the least-significant end
impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Poly {
        let len = self.len().max(rhs.len());
        let mut out = Poly::zeroed(len);
        out[len - self.len()..].copy_from_slice(self);
        for (dst, &c) in out[len - rhs.len()..].iter_mut().zip(rhs.iter()) {
            *dst ^= c;
        }
        out
    }
}

// Convolution
impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Poly {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "cannot multiply an empty polynomial"
        );
        let mut out = Poly::zeroed(self.len() + rhs.len() - 1);
        for (j, &q) in rhs.iter().enumerate() {
            if q == 0 {
                continue;
            }
            for (i, &p) in self.iter().enumerate() {
                out[i + j] ^= gf_mul(p, q);
            }
        }
        out
    }
}
