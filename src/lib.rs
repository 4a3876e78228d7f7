//! # Genesis-Proof
//!
//! Construction and verification of the genesis block of every supported
//! network.
//!
//! The genesis block is the trust root of a chain: its header fields and its
//! single coinbase transaction are compiled-in constants, and its hash and
//! merkle root must be the deterministic result of hashing that data. This
//! crate provides the pure functions that establish this:
//!
//! - canonical byte serialization of headers, transactions and blocks
//! - the double SHA-256 hash used for block and transaction identifiers
//! - merkle root construction over transaction hashes
//! - the per-network genesis registry and its verifier
//!
//! ## Usage
//!
//! ```rust
//! use genesis_proof::GenesisProof;
//! use genesis_proof::types::Network;
//!
//! let genesis = GenesisProof::new();
//! let verified = genesis.verify_network(Network::Mainnet).unwrap();
//! assert_eq!(verified.merkle_root, verified.coinbase_hash);
//! ```

pub mod types;
pub mod constants;
pub mod serialize;
pub mod hash;
pub mod merkle;
pub mod genesis;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use error::{ConsistencyCheck, GenesisError, Result};
pub use genesis::{GenesisRegistry, GenesisSpec, VerificationStatus, VerifiedGenesis};

/// Main genesis proof entry point
///
/// # Examples
///
/// ```
/// use genesis_proof::GenesisProof;
/// use genesis_proof::types::Network;
///
/// let genesis = GenesisProof::new();
/// let spec = genesis.genesis_spec(Network::Signet).unwrap();
/// assert_eq!(genesis.block_hash(&spec.header), spec.expected_hash);
/// ```
pub struct GenesisProof {
    registry: &'static GenesisRegistry,
}

impl GenesisProof {
    /// Create a genesis proof instance over the process-wide registry
    pub fn new() -> Self {
        GenesisProof {
            registry: GenesisRegistry::global(),
        }
    }

    pub fn registry(&self) -> &GenesisRegistry {
        self.registry
    }

    /// Genesis data for a network
    pub fn genesis_spec(&self, network: Network) -> Result<&GenesisSpec> {
        self.registry
            .get(network)
            .ok_or_else(|| GenesisError::UnknownNetwork(network.to_string()))
    }

    /// Genesis block for a network
    pub fn genesis_block(&self, network: Network) -> Result<Block> {
        Ok(self.genesis_spec(network)?.block())
    }

    /// Verify one network's genesis data
    ///
    /// # Examples
    ///
    /// ```
    /// use genesis_proof::GenesisProof;
    /// use genesis_proof::types::Network;
    ///
    /// let genesis = GenesisProof::new();
    /// for network in Network::ALL {
    ///     assert!(genesis.verify_network(network).is_ok());
    /// }
    /// ```
    pub fn verify_network(&self, network: Network) -> Result<VerifiedGenesis> {
        genesis::verify(self.genesis_spec(network)?)
    }

    /// Verify caller-supplied genesis data
    pub fn verify(&self, spec: &GenesisSpec) -> Result<VerifiedGenesis> {
        genesis::verify(spec)
    }

    /// Startup self-check; an error means the node must not start
    pub fn verify_startup(&self, networks: &[Network]) -> Result<Vec<VerifiedGenesis>> {
        self.registry.verify_startup(networks)
    }

    /// Double SHA-256 of the 80-byte header
    pub fn block_hash(&self, header: &BlockHeader) -> Hash {
        hash::block_hash(header)
    }

    /// Double SHA-256 of the serialized transaction
    pub fn tx_hash(&self, tx: &Transaction) -> Hash {
        hash::tx_hash(tx)
    }

    /// Merkle root over transaction hashes
    ///
    /// # Examples
    ///
    /// ```
    /// use genesis_proof::GenesisProof;
    ///
    /// let genesis = GenesisProof::new();
    /// assert_eq!(genesis.merkle_root(&[[7u8; 32]]).unwrap(), [7u8; 32]);
    /// assert!(genesis.merkle_root(&[]).is_err());
    /// ```
    pub fn merkle_root(&self, hashes: &[Hash]) -> Result<Hash> {
        merkle::compute_merkle_root(hashes)
    }
}

impl Default for GenesisProof {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_proof_new() {
        let genesis = GenesisProof::new();
        assert_eq!(genesis.registry().len(), Network::ALL.len());
    }

    #[test]
    fn test_genesis_proof_default() {
        let genesis = GenesisProof::default();
        assert!(genesis.verify_network(Network::Regtest).is_ok());
    }

    #[test]
    fn test_genesis_block() {
        let genesis = GenesisProof::new();
        let block = genesis.genesis_block(Network::Simnet).unwrap();
        assert_eq!(block.header.prev_block_hash, [0u8; 32]);
        assert_eq!(block.transactions.len(), 1);
    }

    #[test]
    fn test_tx_hash_is_merkle_root() {
        let genesis = GenesisProof::new();
        let spec = genesis.genesis_spec(Network::Mainnet).unwrap();
        let tx_hash = genesis.tx_hash(&spec.coinbase);
        assert_eq!(genesis.merkle_root(&[tx_hash]).unwrap(), spec.header.merkle_root);
    }

    #[test]
    fn test_verify_startup_all() {
        let genesis = GenesisProof::new();
        let verified = genesis.verify_startup(&Network::ALL).unwrap();
        assert_eq!(verified.len(), 5);
    }
}
