//! Core block and transaction types for genesis construction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{NULL_OUTPOINT_INDEX, ZERO_HASH};
use crate::error::GenesisError;

/// Hash type: 256-bit hash, stored in natural digest byte order
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// OutPoint: reference to a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The outpoint referenced by every coinbase input
    pub fn null() -> Self {
        OutPoint {
            hash: ZERO_HASH,
            index: NULL_OUTPOINT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash == ZERO_HASH && self.index == NULL_OUTPOINT_INDEX
    }
}

/// Transaction Input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
}

/// Transaction Output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: i64,
    pub script_pubkey: ByteString,
}

/// Transaction: version × inputs × outputs × lock time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// A coinbase has a single input spending the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

/// Block Header: version × prev hash × merkle root × time × bits × nonce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Block: header × transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

/// Networks that carry a genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Regtest,
    Testnet3,
    Simnet,
    Signet,
}

impl Network {
    pub const ALL: [Network; 5] = [
        Network::Mainnet,
        Network::Regtest,
        Network::Testnet3,
        Network::Simnet,
        Network::Signet,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Regtest => "regtest",
            Network::Testnet3 => "testnet3",
            Network::Simnet => "simnet",
            Network::Signet => "signet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "regtest" => Ok(Network::Regtest),
            "testnet3" | "testnet" => Ok(Network::Testnet3),
            "simnet" | "simulation" => Ok(Network::Simnet),
            "signet" => Ok(Network::Signet),
            _ => Err(GenesisError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_outpoint() {
        let outpoint = OutPoint::null();
        assert!(outpoint.is_null());
        assert_eq!(outpoint.index, 0xffffffff);

        let spent = OutPoint { hash: [1; 32], index: 0xffffffff };
        assert!(!spent.is_null());
        let indexed = OutPoint { hash: [0; 32], index: 0 };
        assert!(!indexed.is_null());
    }

    #[test]
    fn test_is_coinbase() {
        let mut tx = Transaction {
            version: 1,
            inputs: vec![TransactionInput {
                prevout: OutPoint::null(),
                script_sig: vec![0x51],
                sequence: 0xffffffff,
            }],
            outputs: vec![],
            lock_time: 0,
        };
        assert!(tx.is_coinbase());

        tx.inputs.push(tx.inputs[0].clone());
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_network_names_round_trip() {
        for network in Network::ALL {
            assert_eq!(network.name().parse::<Network>().unwrap(), network);
            assert_eq!(network.to_string(), network.name());
        }
    }

    #[test]
    fn test_network_aliases() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("TestNet".parse::<Network>().unwrap(), Network::Testnet3);
        assert_eq!("simulation".parse::<Network>().unwrap(), Network::Simnet);
        assert_eq!(" signet ".parse::<Network>().unwrap(), Network::Signet);
    }

    #[test]
    fn test_network_unknown_name() {
        let err = "litecoin".parse::<Network>().unwrap_err();
        assert_eq!(err, GenesisError::UnknownNetwork("litecoin".to_string()));
    }

    #[test]
    fn test_network_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Network::Testnet3).unwrap();
        assert_eq!(json, "\"testnet3\"");
        let network: Network = serde_json::from_str("\"simnet\"").unwrap();
        assert_eq!(network, Network::Simnet);
    }
}
