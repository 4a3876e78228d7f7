//! Hash primitives: SHA-256, double SHA-256 and hash display helpers
//!
//! Hashes are held in natural digest order everywhere in this crate. The
//! reversed ("display") order is only produced at the text boundary by
//! [`to_display_hex`] and consumed by [`from_display_hex`].

use bitcoin_hashes::{sha256d, Hash as BitcoinHash};
use sha2::{Digest, Sha256};

use crate::error::{GenesisError, Result};
use crate::serialize::{serialize_block_header, serialize_transaction};
use crate::types::{BlockHeader, Hash, Transaction};

/// Single SHA-256
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// DoubleHash: SHA-256(SHA-256(data))
///
/// Empty input is well defined.
pub fn double_sha256(data: &[u8]) -> Hash {
    sha256d::Hash::hash(data).into_inner()
}

/// Transaction identifier: double hash of the canonical serialization
pub fn tx_hash(tx: &Transaction) -> Hash {
    double_sha256(&serialize_transaction(tx))
}

/// Block identifier: double hash of the 80-byte header
pub fn block_hash(header: &BlockHeader) -> Hash {
    double_sha256(&serialize_block_header(header))
}

/// Hex in storage order
pub fn to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Hex in display order (bytes reversed)
pub fn to_display_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Parse hex given in storage order
pub fn from_hex(s: &str) -> Result<Hash> {
    let bytes = hex::decode(s.trim())
        .map_err(|e| GenesisError::InvalidInput(format!("Invalid hash hex: {}", e)))?;
    if bytes.len() != 32 {
        return Err(GenesisError::InvalidInput(format!(
            "Hash must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

/// Parse hex given in display order
pub fn from_display_hex(s: &str) -> Result<Hash> {
    let mut hash = from_hex(s)?;
    hash.reverse();
    Ok(hash)
}
