//! Canonical byte encoding of headers, transactions and blocks
//!
//! Integers are little-endian. Counts and script lengths use the varint
//! encoding: values below 0xfd take one byte; larger values take an escape
//! byte (0xfd, 0xfe, 0xff) followed by a 2, 4 or 8 byte little-endian field.

use crate::constants::{BLOCK_HEADER_SIZE, HASH_SIZE};
use crate::error::{GenesisError, Result};
use crate::types::*;

/// Encode a number as a varint
pub fn encode_varint(value: u64) -> Vec<u8> {
    if value < 0xfd {
        vec![value as u8]
    } else if value <= 0xffff {
        let mut result = vec![0xfd];
        result.extend_from_slice(&(value as u16).to_le_bytes());
        result
    } else if value <= 0xffffffff {
        let mut result = vec![0xfe];
        result.extend_from_slice(&(value as u32).to_le_bytes());
        result
    } else {
        let mut result = vec![0xff];
        result.extend_from_slice(&value.to_le_bytes());
        result
    }
}

/// Decode a varint, returning the value and the number of bytes consumed.
///
/// Non-minimal encodings are rejected so every value has one byte form.
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let mut reader = Reader::new(data);
    let value = reader.read_varint()?;
    Ok((value, reader.position()))
}

/// Serialize a block header into its fixed 80-byte layout
pub fn serialize_block_header(header: &BlockHeader) -> Vec<u8> {
    let mut data = Vec::with_capacity(BLOCK_HEADER_SIZE);
    data.extend_from_slice(&header.version.to_le_bytes());
    data.extend_from_slice(&header.prev_block_hash);
    data.extend_from_slice(&header.merkle_root);
    data.extend_from_slice(&header.timestamp.to_le_bytes());
    data.extend_from_slice(&header.bits.to_le_bytes());
    data.extend_from_slice(&header.nonce.to_le_bytes());
    data
}

/// Serialize a transaction
pub fn serialize_transaction(tx: &Transaction) -> Vec<u8> {
    let mut data = Vec::new();
    write_transaction(&mut data, tx);
    data
}

/// Serialize a block: header, transaction count, transactions
pub fn serialize_block(block: &Block) -> Vec<u8> {
    let mut data = serialize_block_header(&block.header);
    data.extend_from_slice(&encode_varint(block.transactions.len() as u64));
    for tx in &block.transactions {
        write_transaction(&mut data, tx);
    }
    data
}

fn write_transaction(data: &mut Vec<u8>, tx: &Transaction) {
    data.extend_from_slice(&tx.version.to_le_bytes());

    data.extend_from_slice(&encode_varint(tx.inputs.len() as u64));
    for input in &tx.inputs {
        data.extend_from_slice(&input.prevout.hash);
        data.extend_from_slice(&input.prevout.index.to_le_bytes());
        data.extend_from_slice(&encode_varint(input.script_sig.len() as u64));
        data.extend_from_slice(&input.script_sig);
        data.extend_from_slice(&input.sequence.to_le_bytes());
    }

    data.extend_from_slice(&encode_varint(tx.outputs.len() as u64));
    for output in &tx.outputs {
        data.extend_from_slice(&output.value.to_le_bytes());
        data.extend_from_slice(&encode_varint(output.script_pubkey.len() as u64));
        data.extend_from_slice(&output.script_pubkey);
    }

    data.extend_from_slice(&tx.lock_time.to_le_bytes());
}

/// Parse an 80-byte block header
pub fn deserialize_block_header(data: &[u8]) -> Result<BlockHeader> {
    if data.len() != BLOCK_HEADER_SIZE {
        return Err(GenesisError::Encoding(format!(
            "Block header must be {} bytes, got {}",
            BLOCK_HEADER_SIZE,
            data.len()
        )));
    }
    let mut reader = Reader::new(data);
    reader.read_block_header()
}

/// Parse a transaction from the front of `data`, returning it and the bytes consumed
pub fn deserialize_transaction(data: &[u8]) -> Result<(Transaction, usize)> {
    let mut reader = Reader::new(data);
    let tx = reader.read_transaction()?;
    Ok((tx, reader.position()))
}

/// Parse a full block; trailing bytes are an error
pub fn deserialize_block(data: &[u8]) -> Result<Block> {
    let mut reader = Reader::new(data);
    let header = reader.read_block_header()?;
    let count = reader.read_count()?;
    let mut transactions = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        transactions.push(reader.read_transaction()?);
    }
    if reader.remaining() != 0 {
        return Err(GenesisError::Encoding(format!(
            "{} trailing bytes after block",
            reader.remaining()
        )));
    }
    Ok(Block { header, transactions })
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(GenesisError::Encoding(format!(
                "Unexpected end of data: need {} bytes at offset {}, {} left",
                len,
                self.pos,
                self.remaining()
            )));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    fn read_hash(&mut self) -> Result<Hash> {
        self.read_array::<HASH_SIZE>()
    }

    fn read_varint(&mut self) -> Result<u64> {
        let (value, min) = match self.read_u8()? {
            0xfd => (self.read_u16()? as u64, 0xfd),
            0xfe => (self.read_u32()? as u64, 0x1_0000),
            0xff => (self.read_u64()?, 0x1_0000_0000),
            small => return Ok(small as u64),
        };
        if value < min {
            return Err(GenesisError::Encoding(format!(
                "Non-canonical varint encoding for {}",
                value
            )));
        }
        Ok(value)
    }

    /// A varint used as an element count or byte length; bounded by the data left
    fn read_count(&mut self) -> Result<usize> {
        let value = self.read_varint()?;
        if value > self.remaining() as u64 {
            return Err(GenesisError::Encoding(format!(
                "Length {} exceeds remaining {} bytes",
                value,
                self.remaining()
            )));
        }
        Ok(value as usize)
    }

    fn read_bytes(&mut self) -> Result<ByteString> {
        let len = self.read_count()?;
        Ok(self.take(len)?.to_vec())
    }

    fn read_block_header(&mut self) -> Result<BlockHeader> {
        Ok(BlockHeader {
            version: self.read_i32()?,
            prev_block_hash: self.read_hash()?,
            merkle_root: self.read_hash()?,
            timestamp: self.read_u32()?,
            bits: self.read_u32()?,
            nonce: self.read_u32()?,
        })
    }

    fn read_transaction(&mut self) -> Result<Transaction> {
        let version = self.read_i32()?;

        let input_count = self.read_count()?;
        let mut inputs = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            let prevout = OutPoint {
                hash: self.read_hash()?,
                index: self.read_u32()?,
            };
            let script_sig = self.read_bytes()?;
            let sequence = self.read_u32()?;
            inputs.push(TransactionInput { prevout, script_sig, sequence });
        }

        let output_count = self.read_count()?;
        let mut outputs = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            let value = self.read_i64()?;
            let script_pubkey = self.read_bytes()?;
            outputs.push(TransactionOutput { value, script_pubkey });
        }

        let lock_time = self.read_u32()?;
        Ok(Transaction { version, inputs, outputs, lock_time })
    }
}
