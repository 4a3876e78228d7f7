//! Merkle root construction over transaction hashes

use crate::error::{GenesisError, Result};
use crate::hash::{double_sha256, tx_hash};
use crate::types::{Hash, Transaction};

/// MerkleRoot: ℍ⁺ → ℍ
///
/// A single hash is its own root. Otherwise each level is paired up, with the
/// last hash duplicated on odd levels, and every pair is double hashed until
/// one hash remains.
pub fn compute_merkle_root(hashes: &[Hash]) -> Result<Hash> {
    if hashes.is_empty() {
        return Err(GenesisError::InvalidInput(
            "Cannot compute merkle root from empty hash list".to_string(),
        ));
    }

    let mut level = hashes.to_vec();
    while level.len() > 1 {
        let mut next_level = Vec::with_capacity((level.len() + 1) / 2);
        for chunk in level.chunks(2) {
            let left = &chunk[0];
            let right = chunk.get(1).unwrap_or(left);
            let mut combined = [0u8; 64];
            combined[..32].copy_from_slice(left);
            combined[32..].copy_from_slice(right);
            next_level.push(double_sha256(&combined));
        }
        level = next_level;
    }

    Ok(level[0])
}

/// Merkle root of a block's transaction list
pub fn merkle_root_from_transactions(transactions: &[Transaction]) -> Result<Hash> {
    let hashes: Vec<Hash> = transactions.iter().map(tx_hash).collect();
    compute_merkle_root(&hashes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::to_hex;

    #[test]
    fn test_merkle_root_empty() {
        let result = compute_merkle_root(&[]);
        assert!(matches!(result, Err(GenesisError::InvalidInput(_))));
    }

    #[test]
    fn test_merkle_root_single_is_identity() {
        for leaf in [[0u8; 32], [0xff; 32], double_sha256(b"leaf")] {
            assert_eq!(compute_merkle_root(&[leaf]).unwrap(), leaf);
        }
    }

    #[test]
    fn test_merkle_root_two_leaves() {
        let root = compute_merkle_root(&[[1; 32], [2; 32]]).unwrap();
        assert_eq!(
            to_hex(&root),
            "39ce20bede82c96b8908bec4a157b09c549b3db90b9b474bda9ae9b9030310b4"
        );
    }

    #[test]
    fn test_merkle_root_odd_level_duplicates_last() {
        let root = compute_merkle_root(&[[1; 32], [2; 32], [3; 32]]).unwrap();
        assert_eq!(
            to_hex(&root),
            "223e023fadf1f053df26988871f893c821c28edf77d64a955e6c2a02d547bdac"
        );
        let padded = compute_merkle_root(&[[1; 32], [2; 32], [3; 32], [3; 32]]).unwrap();
        assert_eq!(root, padded);
    }

    #[test]
    fn test_merkle_root_order_matters() {
        let a = compute_merkle_root(&[[1; 32], [2; 32]]).unwrap();
        let b = compute_merkle_root(&[[2; 32], [1; 32]]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_merkle_root_from_transactions_empty() {
        assert!(merkle_root_from_transactions(&[]).is_err());
    }
}
