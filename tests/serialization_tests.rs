//! Canonical encoding of the genesis block

use genesis_proof::*;
use genesis_proof::constants::BLOCK_HEADER_SIZE;
use genesis_proof::genesis::{genesis_coinbase_transaction, genesis_header};
use genesis_proof::serialize::*;

const GENESIS_COINBASE_HEX: &str = concat!(
    "01000000",
    "01",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "ffffffff",
    "4f",
    "04ffff001d0104474c6f7320416e67656c65732054696d65732031362f5365702f32303232204c6962616e6f2c20",
    "4465706f736974616e74657320697272756d70656e20656e20352062616e636f73",
    "ffffffff",
    "01",
    "00f2052a01000000",
    "44",
    "410435640537707b797e9008199668f1b8e8cc079737676e4c6a62e93984e97056ae45b7954dea30e3369a4feb4b",
    "35a819a4f0a46c8f741ba9cdd380f5744cdc68c7c5ac",
    "00000000",
);

const MAINNET_HEADER_HEX: &str = concat!(
    "01000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "b933a3b73f332b3f7a891274c2d56396d59bf7eb178aa3939d4ff2dd2a949483",
    "91352f63",
    "ffff001d",
    "f13e828d",
);

#[test]
fn test_genesis_coinbase_bytes() {
    let bytes = serialize_transaction(&genesis_coinbase_transaction());
    assert_eq!(bytes.len(), 207);
    assert_eq!(hex::encode(&bytes), GENESIS_COINBASE_HEX);
}

#[test]
fn test_mainnet_header_bytes() {
    let bytes = serialize_block_header(&genesis_header(Network::Mainnet));
    assert_eq!(bytes.len(), BLOCK_HEADER_SIZE);
    assert_eq!(hex::encode(&bytes), MAINNET_HEADER_HEX);
}

#[test]
fn test_all_genesis_headers_encode_identically() {
    let mainnet = serialize_block_header(&genesis_header(Network::Mainnet));
    for network in Network::ALL {
        assert_eq!(serialize_block_header(&genesis_header(network)), mainnet, "{}", network);
    }
}

#[test]
fn test_genesis_header_round_trip() {
    for network in Network::ALL {
        let header = genesis_header(network);
        let parsed = deserialize_block_header(&serialize_block_header(&header)).unwrap();
        assert_eq!(parsed, header);
    }
}

#[test]
fn test_genesis_coinbase_round_trip() {
    let bytes = hex::decode(GENESIS_COINBASE_HEX).unwrap();
    let (tx, used) = deserialize_transaction(&bytes).unwrap();
    assert_eq!(used, bytes.len());
    assert_eq!(tx, genesis_coinbase_transaction());
    assert!(tx.is_coinbase());
}

#[test]
fn test_genesis_block_encoding() {
    let block = GenesisSpec::for_network(Network::Mainnet).block();
    let bytes = serialize_block(&block);
    assert_eq!(bytes.len(), BLOCK_HEADER_SIZE + 1 + 207);
    assert_eq!(hex::encode(&bytes[..BLOCK_HEADER_SIZE]), MAINNET_HEADER_HEX);
    assert_eq!(bytes[BLOCK_HEADER_SIZE], 0x01);
    assert_eq!(deserialize_block(&bytes).unwrap(), block);
}

#[test]
fn test_varint_contract() {
    let cases: [(u64, &str); 7] = [
        (0, "00"),
        (0xfc, "fc"),
        (0xfd, "fdfd00"),
        (0xffff, "fdffff"),
        (0x10000, "fe00000100"),
        (0xffffffff, "feffffffff"),
        (0x100000000, "ff0000000001000000"),
    ];
    for (value, expected) in cases {
        let encoded = encode_varint(value);
        assert_eq!(hex::encode(&encoded), expected);
        assert_eq!(decode_varint(&encoded).unwrap(), (value, encoded.len()));
    }
}
