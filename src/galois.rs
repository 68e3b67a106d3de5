//! Galois Field GF(2^8) arithmetic for Reed-Solomon error correction
//!
//! This module implements 8-bit Galois Field arithmetic using the primitive
//! polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1) with generator element 2.
//!
//! The logarithm and antilogarithm tables are computed at compile time, so the
//! field holds no runtime state at all: every operation is a pure lookup.

/// Primitive polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1)
const GF_GENERATOR: u16 = 0x11D;

/// Number of non-zero field elements (order of the multiplicative group)
pub const GF_ORDER: usize = 255;

/// Precomputed logarithm and antilogarithm tables
pub struct GaloisField {
    log_table: [u8; 256],
    exp_table: [u8; 2 * GF_ORDER + 2], // 2x size to avoid modulo in multiplication
}

impl GaloisField {
    /// Build the tables. Evaluated at compile time for [`GF256`].
    pub const fn new() -> Self {
        let mut log_table = [0u8; 256];
        let mut exp_table = [0u8; 2 * GF_ORDER + 2];

        let mut value: u16 = 1;
        let mut i = 0;
        while i < GF_ORDER {
            exp_table[i] = value as u8;
            log_table[value as usize] = i as u8;

            value <<= 1;
            if value & 0x100 != 0 {
                value ^= GF_GENERATOR;
            }
            i += 1;
        }

        // The antilog sequence has period 255, repeat it
        while i < exp_table.len() {
            exp_table[i] = exp_table[i - GF_ORDER];
            i += 1;
        }

        // log(0) is undefined; 0 keeps lookups in range and is never used by
        // mul/div since they short-circuit on zero operands
        log_table[0] = 0;

        GaloisField {
            log_table,
            exp_table,
        }
    }

    /// Discrete logarithm base 2 of a non-zero element
    #[inline]
    pub const fn log(&self, a: u8) -> u8 {
        self.log_table[a as usize]
    }

    /// 2 raised to `exponent` (exponent taken mod 255)
    #[inline]
    pub const fn exp(&self, exponent: usize) -> u8 {
        self.exp_table[exponent % GF_ORDER]
    }

    /// Add two elements in GF(2^8) - this is just XOR
    #[inline]
    pub const fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtract two elements in GF(2^8) - same as addition (XOR)
    #[inline]
    pub const fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiply two elements in GF(2^8)
    #[inline]
    pub const fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[log_a + log_b]
    }

    /// Divide two elements in GF(2^8)
    ///
    /// # Panics
    /// Panics if `b` is zero.
    #[inline]
    pub const fn div(&self, a: u8, b: u8) -> u8 {
        assert!(b != 0, "Division by zero in Galois Field");
        if a == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[(log_a + GF_ORDER - log_b) % GF_ORDER]
    }

    /// Raise an element to a (possibly negative) power in GF(2^8)
    #[inline]
    pub const fn pow(&self, base: u8, exponent: i32) -> u8 {
        if base == 0 {
            return if exponent == 0 { 1 } else { 0 };
        }

        let log_base = self.log_table[base as usize] as i64;
        let log_result = (log_base * exponent as i64).rem_euclid(GF_ORDER as i64);
        self.exp_table[log_result as usize]
    }

    /// Get the multiplicative inverse of an element
    ///
    /// # Panics
    /// Panics if `a` is zero.
    #[inline]
    pub const fn inverse(&self, a: u8) -> u8 {
        assert!(a != 0, "Cannot invert zero in Galois Field");

        let log_a = self.log_table[a as usize] as usize;
        self.exp_table[GF_ORDER - log_a]
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

/// The field used by the codec. Read-only, built by the compiler.
pub static GF256: GaloisField = GaloisField::new();

/// Convenience functions using the global Galois Field
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    GF256.add(a, b)
}

#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    GF256.sub(a, b)
}

#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    GF256.mul(a, b)
}

#[inline]
pub fn gf_div(a: u8, b: u8) -> u8 {
    GF256.div(a, b)
}

#[inline]
pub fn gf_pow(base: u8, exponent: i32) -> u8 {
    GF256.pow(base, exponent)
}

#[inline]
pub fn gf_inverse(a: u8) -> u8 {
    GF256.inverse(a)
}
