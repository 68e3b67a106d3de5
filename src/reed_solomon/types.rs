//! Capacities and result types for Reed-Solomon codeword operations

use crate::galois::GF_ORDER;

/// Longest data chunk a single codeword may carry
pub const MAX_CHUNK_SIZE: usize = 223;

/// Most ECC symbols a single codeword may carry
pub const MAX_ECC_SYMBOLS: usize = 64;

/// GF(2^8) codeword bound: data + ECC must fit in 255 symbols
pub const MAX_CODEWORD_LEN: usize = GF_ORDER;

/// Capacity of every [`Poly`](super::Poly) coefficient buffer
pub const POLY_CAPACITY: usize = MAX_CHUNK_SIZE + MAX_ECC_SYMBOLS;

/// Outcome of a successful codeword decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodewordStatus {
    /// All syndromes were zero, nothing touched
    Clean,
    /// This many symbols were repaired
    Corrected(usize),
}

impl CodewordStatus {
    /// Number of symbols that were repaired
    pub fn corrected_symbols(&self) -> usize {
        match self {
            CodewordStatus::Clean => 0,
            CodewordStatus::Corrected(n) => *n,
        }
    }
}
