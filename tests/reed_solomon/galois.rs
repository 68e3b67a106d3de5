//! Galois Field (GF(2^8)) Arithmetic Tests
//!
//! Field operations checked against the canonical 0x11D tables.

use rsecc::galois::{gf_add, gf_div, gf_inverse, gf_mul, gf_pow, gf_sub, GaloisField, GF256};

// ============================================================================
// Basic Arithmetic Operations
// ============================================================================

#[test]
fn test_add_and_sub_are_xor() {
    for a in 0..=255u8 {
        assert_eq!(gf_add(a, 0x5c), a ^ 0x5c);
        assert_eq!(gf_sub(a, 0x5c), a ^ 0x5c);
        assert_eq!(gf_add(a, a), 0);
    }
}

#[test]
fn test_multiplication_by_zero_and_one() {
    for a in 0..=255u8 {
        assert_eq!(gf_mul(a, 0), 0);
        assert_eq!(gf_mul(0, a), 0);
        assert_eq!(gf_mul(a, 1), a);
    }
}

#[test]
fn test_known_products() {
    // Carry-less products reduced by 0x11D
    assert_eq!(gf_mul(3, 7), 9);
    assert_eq!(gf_mul(0x80, 0x02), 0x1d);
    assert_eq!(gf_mul(0x53, 0xca), 0x8f);
}

/// Shift-and-add multiplication with no tables
fn slow_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1d;
        }
        b >>= 1;
    }
    product
}

#[test]
fn test_table_multiplication_matches_shift_and_add() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(gf_mul(a, b), slow_mul(a, b), "a = {}, b = {}", a, b);
        }
    }
}

// ============================================================================
// Division, Inverse and Power
// ============================================================================

#[test]
fn test_division_inverts_multiplication() {
    for a in 0..=255u8 {
        for b in 1..=255u8 {
            assert_eq!(gf_div(gf_mul(a, b), b), a);
        }
    }
}

#[test]
fn test_inverse() {
    assert_eq!(gf_inverse(1), 1);
    for a in 1..=255u8 {
        assert_eq!(gf_mul(a, gf_inverse(a)), 1);
        assert_eq!(gf_div(1, a), gf_inverse(a));
    }
}

#[test]
fn test_powers_of_two_cycle() {
    assert_eq!(gf_pow(2, 0), 1);
    assert_eq!(gf_pow(2, 7), 0x80);
    assert_eq!(gf_pow(2, 8), 0x1d);
    assert_eq!(gf_pow(2, 255), 1);
    assert_eq!(gf_pow(2, 256), 2);

    let mut x = 1u8;
    for i in 0..300 {
        assert_eq!(gf_pow(2, i), x, "2^{}", i);
        x = gf_mul(x, 2);
    }
}

#[test]
fn test_log_exp_are_inverse() {
    for a in 1..=255u8 {
        assert_eq!(GF256.exp(GF256.log(a) as usize), a);
    }
}

#[test]
fn test_const_field_matches_global() {
    let gf = GaloisField::new();
    for a in 0..=255u8 {
        assert_eq!(gf.mul(a, 0x1f), GF256.mul(a, 0x1f));
    }
}
