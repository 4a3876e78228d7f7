//! Protocol constants and the genesis data tables for every network
//!
//! The literals in this module define network identity. Changing any of them
//! changes the genesis hash of the affected network.

use crate::types::Hash;

/// All-zero hash, used as the parent of every genesis block
pub const ZERO_HASH: Hash = [0u8; 32];

/// Output index referenced by a coinbase input
pub const NULL_OUTPOINT_INDEX: u32 = 0xffffffff;

/// Sequence number for final transaction
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Serialized block header size in bytes
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Size of a hash in bytes
pub const HASH_SIZE: usize = 32;

/// Satoshis per coin
pub const SATOSHIS_PER_COIN: i64 = 100_000_000;

/// Genesis block version, shared by every network
pub const GENESIS_VERSION: i32 = 1;

/// Genesis coinbase transaction version
pub const GENESIS_COINBASE_VERSION: i32 = 1;

/// Genesis coinbase lock time
pub const GENESIS_COINBASE_LOCK_TIME: u32 = 0;

/// Genesis reward: 0x12a05f200 = 50 coins
pub const GENESIS_REWARD: i64 = 50 * SATOSHIS_PER_COIN;

/// Signature script of the genesis coinbase input.
///
/// `04 ffff001d` pushes the genesis bits, `01 04` pushes 4, and the remainder
/// is the embedded headline:
/// "Los Angeles Times 16/Sep/2022 Libano, Depositantes irrumpen en 5 bancos".
pub const GENESIS_COINBASE_SCRIPT_SIG: [u8; 79] = [
    0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x47,
    0x4c, 0x6f, 0x73, 0x20, 0x41, 0x6e, 0x67, 0x65,
    0x6c, 0x65, 0x73, 0x20, 0x54, 0x69, 0x6d, 0x65,
    0x73, 0x20, 0x31, 0x36, 0x2f, 0x53, 0x65, 0x70,
    0x2f, 0x32, 0x30, 0x32, 0x32, 0x20, 0x4c, 0x69,
    0x62, 0x61, 0x6e, 0x6f, 0x2c, 0x20, 0x44, 0x65,
    0x70, 0x6f, 0x73, 0x69, 0x74, 0x61, 0x6e, 0x74,
    0x65, 0x73, 0x20, 0x69, 0x72, 0x72, 0x75, 0x6d,
    0x70, 0x65, 0x6e, 0x20, 0x65, 0x6e, 0x20, 0x35,
    0x20, 0x62, 0x61, 0x6e, 0x63, 0x6f, 0x73,
];

/// Locking script of the genesis coinbase output, ending in OP_CHECKSIG.
///
/// The leading `0x41` push declares a 65-byte key while 66 bytes precede the
/// opcode; kept as published, like the signature script.
pub const GENESIS_COINBASE_SCRIPT_PUBKEY: [u8; 68] = [
    0x41, 0x04, 0x35, 0x64, 0x05, 0x37, 0x70, 0x7b,
    0x79, 0x7e, 0x90, 0x08, 0x19, 0x96, 0x68, 0xf1,
    0xb8, 0xe8, 0xcc, 0x07, 0x97, 0x37, 0x67, 0x6e,
    0x4c, 0x6a, 0x62, 0xe9, 0x39, 0x84, 0xe9, 0x70,
    0x56, 0xae, 0x45, 0xb7, 0x95, 0x4d, 0xea, 0x30,
    0xe3, 0x36, 0x9a, 0x4f, 0xeb, 0x4b, 0x35, 0xa8,
    0x19, 0xa4, 0xf0, 0xa4, 0x6c, 0x8f, 0x74, 0x1b,
    0xa9, 0xcd, 0xd3, 0x80, 0xf5, 0x74, 0x4c, 0xdc,
    0x68, 0xc7, 0xc5, 0xac,
];

// Main network

/// 2022-09-24 16:51:29 UTC
pub const MAINNET_GENESIS_TIMESTAMP: u32 = 0x632F3591;
/// 486604799
pub const MAINNET_GENESIS_BITS: u32 = 0x1d00ffff;
/// 2374123249
pub const MAINNET_GENESIS_NONCE: u32 = 0x8D823EF1;

/// Hash of the coinbase transaction, which is the genesis merkle root.
/// Display order: 8394942addf24f9d93a38a17ebf79bd59663d5c27412897a3f2b333fb7a333b9
pub const MAINNET_GENESIS_MERKLE_ROOT: Hash = [
    0xb9, 0x33, 0xa3, 0xb7, 0x3f, 0x33, 0x2b, 0x3f,
    0x7a, 0x89, 0x12, 0x74, 0xc2, 0xd5, 0x63, 0x96,
    0xd5, 0x9b, 0xf7, 0xeb, 0x17, 0x8a, 0xa3, 0x93,
    0x9d, 0x4f, 0xf2, 0xdd, 0x2a, 0x94, 0x94, 0x83,
];

/// Display order: 104470061ca2996a6066b940aea0c710f3a9132ddfc6c2e84ef524b2d94d33bf
pub const MAINNET_GENESIS_HASH: Hash = [
    0xbf, 0x33, 0x4d, 0xd9, 0xb2, 0x24, 0xf5, 0x4e,
    0xe8, 0xc2, 0xc6, 0xdf, 0x2d, 0x13, 0xa9, 0xf3,
    0x10, 0xc7, 0xa0, 0xae, 0x40, 0xb9, 0x66, 0x60,
    0x6a, 0x99, 0xa2, 0x1c, 0x06, 0x70, 0x44, 0x10,
];

// Regression test network

/// Same instant as the main network timestamp. The published annotation
/// reads 2011-02-02 23:16:42 UTC, which does not match this literal.
pub const REGTEST_GENESIS_TIMESTAMP: u32 = 1664038289;
/// 486604799
pub const REGTEST_GENESIS_BITS: u32 = 0x1d00ffff;
/// 0x8D823EF1
pub const REGTEST_GENESIS_NONCE: u32 = 2374123249;

pub const REGTEST_GENESIS_MERKLE_ROOT: Hash = MAINNET_GENESIS_MERKLE_ROOT;

pub const REGTEST_GENESIS_HASH: Hash = [
    0xbf, 0x33, 0x4d, 0xd9, 0xb2, 0x24, 0xf5, 0x4e,
    0xe8, 0xc2, 0xc6, 0xdf, 0x2d, 0x13, 0xa9, 0xf3,
    0x10, 0xc7, 0xa0, 0xae, 0x40, 0xb9, 0x66, 0x60,
    0x6a, 0x99, 0xa2, 0x1c, 0x06, 0x70, 0x44, 0x10,
];

// Test network (version 3)

/// Published annotation reads 2011-02-02 23:16:42 UTC; the literal is 2022-09-24.
pub const TESTNET3_GENESIS_TIMESTAMP: u32 = 1664038289;
pub const TESTNET3_GENESIS_BITS: u32 = 0x1d00ffff;
pub const TESTNET3_GENESIS_NONCE: u32 = 0x8D823EF1;

pub const TESTNET3_GENESIS_MERKLE_ROOT: Hash = MAINNET_GENESIS_MERKLE_ROOT;

pub const TESTNET3_GENESIS_HASH: Hash = [
    0xbf, 0x33, 0x4d, 0xd9, 0xb2, 0x24, 0xf5, 0x4e,
    0xe8, 0xc2, 0xc6, 0xdf, 0x2d, 0x13, 0xa9, 0xf3,
    0x10, 0xc7, 0xa0, 0xae, 0x40, 0xb9, 0x66, 0x60,
    0x6a, 0x99, 0xa2, 0x1c, 0x06, 0x70, 0x44, 0x10,
];

// Simulation test network

/// Published annotation reads 2014-05-28 15:52:37 UTC; the literal is 2022-09-24.
pub const SIMNET_GENESIS_TIMESTAMP: u32 = 1664038289;
pub const SIMNET_GENESIS_BITS: u32 = 0x1d00ffff;
pub const SIMNET_GENESIS_NONCE: u32 = 0x8D823EF1;

pub const SIMNET_GENESIS_MERKLE_ROOT: Hash = MAINNET_GENESIS_MERKLE_ROOT;

pub const SIMNET_GENESIS_HASH: Hash = [
    0xbf, 0x33, 0x4d, 0xd9, 0xb2, 0x24, 0xf5, 0x4e,
    0xe8, 0xc2, 0xc6, 0xdf, 0x2d, 0x13, 0xa9, 0xf3,
    0x10, 0xc7, 0xa0, 0xae, 0x40, 0xb9, 0x66, 0x60,
    0x6a, 0x99, 0xa2, 0x1c, 0x06, 0x70, 0x44, 0x10,
];

// Signet test network

/// Published annotation reads 2020-09-01 00:00:00 UTC; the literal is 2022-09-24.
pub const SIGNET_GENESIS_TIMESTAMP: u32 = 1664038289;
pub const SIGNET_GENESIS_BITS: u32 = 0x1d00ffff;
pub const SIGNET_GENESIS_NONCE: u32 = 2374123249;

pub const SIGNET_GENESIS_MERKLE_ROOT: Hash = MAINNET_GENESIS_MERKLE_ROOT;

pub const SIGNET_GENESIS_HASH: Hash = [
    0xbf, 0x33, 0x4d, 0xd9, 0xb2, 0x24, 0xf5, 0x4e,
    0xe8, 0xc2, 0xc6, 0xdf, 0x2d, 0x13, 0xa9, 0xf3,
    0x10, 0xc7, 0xa0, 0xae, 0x40, 0xb9, 0x66, 0x60,
    0x6a, 0x99, 0xa2, 0x1c, 0x06, 0x70, 0x44, 0x10,
];
