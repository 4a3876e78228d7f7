//! Error types for genesis construction and verification

use std::fmt;

use thiserror::Error;

use crate::types::Network;

/// Which of the genesis consistency checks failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyCheck {
    /// Recomputed merkle root differs from the expected merkle root
    MerkleRoot,
    /// Merkle root field declared in the header differs from the recomputed root
    HeaderMerkleRoot,
    /// Recomputed header hash differs from the expected block hash
    BlockHash,
}

impl fmt::Display for ConsistencyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConsistencyCheck::MerkleRoot => "merkle root",
            ConsistencyCheck::HeaderMerkleRoot => "header merkle root",
            ConsistencyCheck::BlockHash => "block hash",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid coinbase: {0}")]
    InvalidCoinbase(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Hashes are rendered in display (reversed) order.
    #[error("Genesis {check} mismatch on {network}: expected {expected}, computed {actual}")]
    Consistency {
        network: Network,
        check: ConsistencyCheck,
        expected: String,
        actual: String,
    },
}

impl GenesisError {
    pub fn is_consistency(&self) -> bool {
        matches!(self, GenesisError::Consistency { .. })
    }
}

pub type Result<T> = std::result::Result<T, GenesisError>;
