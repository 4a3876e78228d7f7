//! Genesis registry and verification
//!
//! Each network has exactly one genesis block. Its declared header fields,
//! coinbase transaction and expected hashes live in [`GenesisSpec`] values
//! held by an immutable [`GenesisRegistry`]. [`verify`] recomputes the
//! coinbase hash, merkle root and header hash from the declared data and
//! compares them with the expected constants.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::constants::*;
use crate::error::{ConsistencyCheck, GenesisError, Result};
use crate::hash::{block_hash, to_display_hex, tx_hash};
use crate::merkle::compute_merkle_root;
use crate::types::*;

/// Genesis data for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisSpec {
    pub network: Network,
    pub header: BlockHeader,
    pub coinbase: Transaction,
    #[serde(with = "display_hash")]
    pub expected_hash: Hash,
    #[serde(with = "display_hash")]
    pub expected_merkle_root: Hash,
}

impl GenesisSpec {
    /// The compiled-in genesis data for `network`
    pub fn for_network(network: Network) -> Self {
        let (expected_hash, expected_merkle_root) = match network {
            Network::Mainnet => (MAINNET_GENESIS_HASH, MAINNET_GENESIS_MERKLE_ROOT),
            Network::Regtest => (REGTEST_GENESIS_HASH, REGTEST_GENESIS_MERKLE_ROOT),
            Network::Testnet3 => (TESTNET3_GENESIS_HASH, TESTNET3_GENESIS_MERKLE_ROOT),
            Network::Simnet => (SIMNET_GENESIS_HASH, SIMNET_GENESIS_MERKLE_ROOT),
            Network::Signet => (SIGNET_GENESIS_HASH, SIGNET_GENESIS_MERKLE_ROOT),
        };
        GenesisSpec {
            network,
            header: genesis_header(network),
            coinbase: genesis_coinbase_transaction(),
            expected_hash,
            expected_merkle_root,
        }
    }

    /// The full genesis block: header plus its single coinbase
    pub fn block(&self) -> Block {
        Block {
            header: self.header.clone(),
            transactions: vec![self.coinbase.clone()],
        }
    }
}

/// Coinbase transaction shared by every network's genesis block
pub fn genesis_coinbase_transaction() -> Transaction {
    Transaction {
        version: GENESIS_COINBASE_VERSION,
        inputs: vec![TransactionInput {
            prevout: OutPoint::null(),
            script_sig: GENESIS_COINBASE_SCRIPT_SIG.to_vec(),
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TransactionOutput {
            value: GENESIS_REWARD,
            script_pubkey: GENESIS_COINBASE_SCRIPT_PUBKEY.to_vec(),
        }],
        lock_time: GENESIS_COINBASE_LOCK_TIME,
    }
}

/// Declared genesis header for `network`
pub fn genesis_header(network: Network) -> BlockHeader {
    let (merkle_root, timestamp, bits, nonce) = match network {
        Network::Mainnet => (
            MAINNET_GENESIS_MERKLE_ROOT,
            MAINNET_GENESIS_TIMESTAMP,
            MAINNET_GENESIS_BITS,
            MAINNET_GENESIS_NONCE,
        ),
        Network::Regtest => (
            REGTEST_GENESIS_MERKLE_ROOT,
            REGTEST_GENESIS_TIMESTAMP,
            REGTEST_GENESIS_BITS,
            REGTEST_GENESIS_NONCE,
        ),
        Network::Testnet3 => (
            TESTNET3_GENESIS_MERKLE_ROOT,
            TESTNET3_GENESIS_TIMESTAMP,
            TESTNET3_GENESIS_BITS,
            TESTNET3_GENESIS_NONCE,
        ),
        Network::Simnet => (
            SIMNET_GENESIS_MERKLE_ROOT,
            SIMNET_GENESIS_TIMESTAMP,
            SIMNET_GENESIS_BITS,
            SIMNET_GENESIS_NONCE,
        ),
        Network::Signet => (
            SIGNET_GENESIS_MERKLE_ROOT,
            SIGNET_GENESIS_TIMESTAMP,
            SIGNET_GENESIS_BITS,
            SIGNET_GENESIS_NONCE,
        ),
    };
    BlockHeader {
        version: GENESIS_VERSION,
        prev_block_hash: ZERO_HASH,
        merkle_root,
        timestamp,
        bits,
        nonce,
    }
}

/// Values recomputed by a successful [`verify`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedGenesis {
    pub network: Network,
    #[serde(with = "display_hash")]
    pub coinbase_hash: Hash,
    #[serde(with = "display_hash")]
    pub merkle_root: Hash,
    #[serde(with = "display_hash")]
    pub block_hash: Hash,
}

/// Outcome of verifying one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified(VerifiedGenesis),
    Inconsistent(GenesisError),
}

impl VerificationStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Verified(_))
    }
}

/// Verify: GenesisSpec → {Verified, Inconsistent}
///
/// 1. The coinbase must spend the null outpoint with one input and one output
/// 2. The header must have the all-zero parent
/// 3. MerkleRoot([DoubleHash(coinbase)]) must equal the expected merkle root
///    and the header's declared merkle root
/// 4. DoubleHash(header with that root) must equal the expected block hash
pub fn verify(spec: &GenesisSpec) -> Result<VerifiedGenesis> {
    check_coinbase_structure(&spec.coinbase)?;

    if spec.header.prev_block_hash != ZERO_HASH {
        return Err(GenesisError::InvalidInput(format!(
            "Genesis header for {} has non-zero parent {}",
            spec.network,
            to_display_hex(&spec.header.prev_block_hash)
        )));
    }

    let coinbase_hash = tx_hash(&spec.coinbase);
    let merkle_root = compute_merkle_root(&[coinbase_hash])?;
    debug!(
        network = %spec.network,
        coinbase_hash = %to_display_hex(&coinbase_hash),
        "recomputed genesis merkle root"
    );

    if merkle_root != spec.expected_merkle_root {
        return Err(mismatch(
            spec.network,
            ConsistencyCheck::MerkleRoot,
            &spec.expected_merkle_root,
            &merkle_root,
        ));
    }
    if spec.header.merkle_root != merkle_root {
        return Err(mismatch(
            spec.network,
            ConsistencyCheck::HeaderMerkleRoot,
            &spec.header.merkle_root,
            &merkle_root,
        ));
    }

    let header = BlockHeader {
        merkle_root,
        ..spec.header.clone()
    };
    let computed_hash = block_hash(&header);
    debug!(
        network = %spec.network,
        block_hash = %to_display_hex(&computed_hash),
        "recomputed genesis block hash"
    );

    if computed_hash != spec.expected_hash {
        return Err(mismatch(
            spec.network,
            ConsistencyCheck::BlockHash,
            &spec.expected_hash,
            &computed_hash,
        ));
    }

    Ok(VerifiedGenesis {
        network: spec.network,
        coinbase_hash,
        merkle_root,
        block_hash: computed_hash,
    })
}

fn check_coinbase_structure(tx: &Transaction) -> Result<()> {
    if !tx.is_coinbase() {
        return Err(GenesisError::InvalidCoinbase(
            "Genesis coinbase must have exactly one input spending the null outpoint".to_string(),
        ));
    }
    if tx.outputs.len() != 1 {
        return Err(GenesisError::InvalidCoinbase(format!(
            "Genesis coinbase must have exactly one output, found {}",
            tx.outputs.len()
        )));
    }
    Ok(())
}

fn mismatch(network: Network, check: ConsistencyCheck, expected: &Hash, actual: &Hash) -> GenesisError {
    GenesisError::Consistency {
        network,
        check,
        expected: to_display_hex(expected),
        actual: to_display_hex(actual),
    }
}

/// Read-only mapping from network to its genesis data
#[derive(Debug, Clone)]
pub struct GenesisRegistry {
    specs: BTreeMap<Network, GenesisSpec>,
}

impl GenesisRegistry {
    /// Registry holding every supported network
    pub fn new() -> Self {
        Self::from_specs(Network::ALL.iter().map(|&network| GenesisSpec::for_network(network)))
    }

    /// Registry over caller-supplied specs; a later spec for the same network replaces an earlier one
    pub fn from_specs(specs: impl IntoIterator<Item = GenesisSpec>) -> Self {
        GenesisRegistry {
            specs: specs.into_iter().map(|spec| (spec.network, spec)).collect(),
        }
    }

    /// Process-wide registry, built on first use and never mutated
    pub fn global() -> &'static GenesisRegistry {
        static REGISTRY: OnceLock<GenesisRegistry> = OnceLock::new();
        REGISTRY.get_or_init(GenesisRegistry::new)
    }

    pub fn get(&self, network: Network) -> Option<&GenesisSpec> {
        self.specs.get(&network)
    }

    pub fn get_by_name(&self, name: &str) -> Result<&GenesisSpec> {
        let network: Network = name.parse()?;
        self.get(network)
            .ok_or_else(|| GenesisError::UnknownNetwork(name.to_string()))
    }

    pub fn networks(&self) -> Vec<Network> {
        self.specs.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenesisSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Verify every network, reporting each outcome without stopping at the first failure
    pub fn verify_all(&self) -> Vec<(Network, VerificationStatus)> {
        self.specs
            .values()
            .map(|spec| {
                let status = match verify(spec) {
                    Ok(verified) => {
                        info!(network = %spec.network, block_hash = %to_display_hex(&verified.block_hash), "genesis verified");
                        VerificationStatus::Verified(verified)
                    }
                    Err(e) => {
                        error!(network = %spec.network, error = %e, "genesis inconsistent");
                        VerificationStatus::Inconsistent(e)
                    }
                };
                (spec.network, status)
            })
            .collect()
    }

    /// Startup self-check for the configured networks.
    ///
    /// Any failure is returned immediately; the caller must not operate on a
    /// chain whose genesis block did not verify.
    pub fn verify_startup(&self, networks: &[Network]) -> Result<Vec<VerifiedGenesis>> {
        let mut verified = Vec::with_capacity(networks.len());
        for &network in networks {
            let spec = self
                .get(network)
                .ok_or_else(|| GenesisError::UnknownNetwork(network.to_string()))?;
            match verify(spec) {
                Ok(result) => {
                    info!(network = %network, block_hash = %to_display_hex(&result.block_hash), "genesis verified");
                    verified.push(result);
                }
                Err(e) => {
                    error!(network = %network, error = %e, "refusing to start: genesis inconsistent");
                    return Err(e);
                }
            }
        }
        Ok(verified)
    }
}

impl Default for GenesisRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Serde adapter writing hashes as display-order hex strings
mod display_hash {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::hash::{from_display_hex, to_display_hex};
    use crate::types::Hash;

    pub fn serialize<S: Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_display_hex(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
        let s = String::deserialize(deserializer)?;
        from_display_hex(&s).map_err(D::Error::custom)
    }
}
