//! Single-codeword encode/decode tests
//!
//! Exercises `encode_block` and `decode_codeword` directly, without chunking.

use rsecc::reed_solomon::{
    decode_codeword, encode_block, generator_poly, is_codeword_clean, CodewordStatus, Poly,
};
use rsecc::CodewordError;

fn codeword(data: &[u8], ecc_len: usize) -> Vec<u8> {
    let generator = generator_poly(ecc_len);
    let mut ecc = vec![0u8; ecc_len];
    encode_block(&generator, data, &mut ecc);
    let mut cw = data.to_vec();
    cw.extend_from_slice(&ecc);
    cw
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_hello_world_ecc() {
    let cw = codeword(b"HelloWorld!", 4);
    assert_eq!(cw.len(), 15);
    assert_eq!(&cw[11..], &[0x5f, 0x6c, 0xc3, 0xd1]);
}

#[test]
fn test_encoding_is_deterministic() {
    let data: Vec<u8> = (0..100u8).rev().collect();
    assert_eq!(codeword(&data, 16), codeword(&data, 16));
}

#[test]
fn test_encoding_is_linear() {
    let a = codeword(&[1, 2, 3, 4], 6);
    let b = codeword(&[9, 8, 7, 6], 6);
    let sum = codeword(&[1 ^ 9, 2 ^ 8, 3 ^ 7, 4 ^ 6], 6);
    let xored: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();
    assert_eq!(xored, sum);
}

#[test]
fn test_systematic_layout() {
    let data = b"systematic";
    let cw = codeword(data, 8);
    assert_eq!(&cw[..data.len()], data);
    assert!(is_codeword_clean(&cw, 8));
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_hello_world_every_two_byte_corruption() {
    let original = codeword(b"HelloWorld!", 4);
    for a in 0..original.len() {
        for b in (a + 1)..original.len() {
            let mut cw = original.clone();
            cw[a] ^= 0x5a;
            cw[b] ^= 0xff;
            let status = decode_codeword(&mut cw, 4);
            assert_eq!(status, Ok(CodewordStatus::Corrected(2)), "a = {}, b = {}", a, b);
            assert_eq!(cw, original, "a = {}, b = {}", a, b);
        }
    }
}

#[test]
fn test_hello_world_three_errors_never_falsely_succeed() {
    let original = codeword(b"HelloWorld!", 4);
    for a in 0..original.len() {
        for b in (a + 1)..original.len() {
            for c in (b + 1)..original.len() {
                let mut cw = original.clone();
                cw[a] ^= 0xff;
                cw[b] ^= 0xff;
                cw[c] ^= 0xff;
                let received = cw.clone();

                match decode_codeword(&mut cw, 4) {
                    Ok(_) => assert_eq!(cw, original, "false success at {}, {}, {}", a, b, c),
                    Err(_) => assert_eq!(cw, received),
                }
            }
        }
    }
}

#[test]
fn test_single_data_byte_codeword() {
    let original = codeword(&[0x99], 2);
    let mut cw = original.clone();
    cw[0] = 0;
    assert_eq!(decode_codeword(&mut cw, 2), Ok(CodewordStatus::Corrected(1)));
    assert_eq!(cw, original);
}

#[test]
fn test_locator_degree_beyond_bound() {
    let original = codeword(b"abcdefgh", 2);
    let mut cw = original.clone();
    cw[0] ^= 0xff;
    cw[2] ^= 0xff;
    let received = cw.clone();

    let err = decode_codeword(&mut cw, 2).unwrap_err();
    assert_eq!(err, CodewordError::TooManyErrors { errors: 2, ecc_len: 2 });
    assert_eq!(cw, received);
    assert!(err.to_string().contains("2 errors"));
}

#[test]
fn test_poly_is_reexported() {
    let generator = generator_poly(3);
    assert_eq!(generator.len(), 4);
    assert_eq!(generator[0], 1);
    assert_eq!(Poly::one().as_slice(), &[1]);
}
