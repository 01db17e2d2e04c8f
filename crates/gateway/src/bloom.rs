//! The 2048-bit log bloom filter.

use alloy_primitives::Bloom;
use sha3::{Digest, Sha3_256};

use crate::types::RpcLog;

/// Computes the bloom over a receipt's logs.
///
/// For every log, the *stringified* address and topics (the values as they
/// appear in the RPC-shape log, prefix included) are hashed, and three
/// 11-bit windows of each digest select the bits to set. Hashing the strings
/// rather than the underlying 20- and 32-byte values is part of the wire
/// contract; clients that precompute blooms do it over the same strings.
pub fn logs_bloom<'a>(logs: impl IntoIterator<Item = &'a RpcLog>) -> Bloom {
    let mut bits = [0u8; 256];
    for log in logs {
        accrue(&mut bits, log.address.as_bytes());
        for topic in &log.topics {
            accrue(&mut bits, topic.as_bytes());
        }
    }
    Bloom::from(bits)
}

/// Sets the three bloom bits selected by the digest of `data`.
///
/// The field is big-endian: bit 0 is the least-significant bit of the last
/// byte. Each of the digest's first three byte pairs is masked to 11 bits to
/// pick one position.
fn accrue(bits: &mut [u8; 256], data: &[u8]) {
    let digest = Sha3_256::digest(data);
    for pair in digest[..6].chunks_exact(2) {
        let bit = (((pair[0] as usize) << 8) | pair[1] as usize) & 2047;
        bits[255 - bit / 8] |= 1 << (bit % 8);
    }
}
