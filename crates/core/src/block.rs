//! Block and block header structures.
//!
//! Blocks carry only what the scheduling layers consume: the mint timestamp
//! and the identity of the validator that produced them. Block bodies live in
//! other layers and are referenced here by their hash. Timestamps are always
//! supplied by the caller; this crate never reads the system clock.

use crate::crypto::{Address, Keypair, PublicKey, Signature};
use crate::hash::{hash, Hash};
use serde::{Deserialize, Serialize};

/// The header of a block containing scheduling metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block height (0 for genesis).
    pub height: u64,
    /// Mint time, Unix timestamp in seconds.
    pub timestamp: u64,
    /// Hash of the previous block header.
    pub prev_hash: Hash,
    /// Hash of the block body (owned by other layers).
    pub body_hash: Hash,
    /// Address of the validator that produced this block.
    pub validator: Address,
}

impl BlockHeader {
    /// Calculate the hash of this block header.
    pub fn hash(&self) -> Hash {
        let encoded = bincode::serialize(self).expect("serialization should not fail");
        hash(&encoded)
    }
}

/// A complete block: header plus the producer's signature over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block header.
    pub header: BlockHeader,
    /// Validator signature over the block header hash.
    pub signature: Signature,
}

impl Block {
    /// Create a new unsigned block.
    pub fn new(
        height: u64,
        timestamp: u64,
        prev_hash: Hash,
        body_hash: Hash,
        validator: Address,
    ) -> Self {
        Self {
            header: BlockHeader {
                height,
                timestamp,
                prev_hash,
                body_hash,
                validator,
            },
            signature: Signature::default(),
        }
    }

    /// Create the genesis block. Genesis sits at the epoch origin.
    pub fn genesis(validator: Address) -> Self {
        Self::new(0, 0, Hash::ZERO, Hash::ZERO, validator)
    }

    /// Get the block hash (hash of the header).
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Get the block height.
    pub fn height(&self) -> u64 {
        self.header.height
    }

    /// Get the mint timestamp.
    pub fn timestamp(&self) -> u64 {
        self.header.timestamp
    }

    /// Get the validator that produced this block.
    pub fn validator(&self) -> Address {
        self.header.validator
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.header.height == 0 && self.header.prev_hash == Hash::ZERO
    }

    /// Sign the block with the validator's keypair.
    pub fn sign(&mut self, keypair: &Keypair) {
        self.signature = keypair.sign_hash(&self.header.hash());
    }

    /// Create a signed block.
    pub fn signed(mut self, keypair: &Keypair) -> Self {
        self.sign(keypair);
        self
    }

    /// Verify the block signature against the producer's public key.
    pub fn verify_signature(&self, public_key: &PublicKey) -> bool {
        public_key
            .verify(self.header.hash().as_bytes(), &self.signature)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_block() {
        let validator = Address::from_bytes([1u8; 20]);
        let genesis = Block::genesis(validator);

        assert!(genesis.is_genesis());
        assert_eq!(genesis.height(), 0);
        assert_eq!(genesis.timestamp(), 0);
        assert_eq!(genesis.header.prev_hash, Hash::ZERO);
        assert_eq!(genesis.validator(), validator);
    }

    #[test]
    fn test_block_hash_deterministic() {
        let block = Block::genesis(Address::from_bytes([1u8; 20]));
        assert_eq!(block.hash(), block.hash());
    }

    #[test]
    fn test_timestamp_is_caller_supplied() {
        let validator = Address::from_bytes([2u8; 20]);
        let block = Block::new(7, 12345670, Hash::ZERO, Hash::ZERO, validator);
        assert_eq!(block.timestamp(), 12345670);
        assert_eq!(block.height(), 7);
    }

    #[test]
    fn test_block_signing() {
        let keypair = Keypair::generate();
        let block = Block::genesis(keypair.address()).signed(&keypair);
        assert!(block.verify_signature(&keypair.public_key));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let keypair1 = Keypair::generate();
        let keypair2 = Keypair::generate();
        let block = Block::genesis(keypair1.address()).signed(&keypair1);
        assert!(!block.verify_signature(&keypair2.public_key));
    }

    #[test]
    fn test_block_serde_roundtrip() {
        let keypair = Keypair::generate();
        let block = Block::genesis(keypair.address()).signed(&keypair);
        let encoded = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, block);
    }

    #[test]
    fn test_tampered_header_fails_verification() {
        let keypair = Keypair::generate();
        let mut block = Block::genesis(keypair.address()).signed(&keypair);
        block.header.timestamp = 10;
        assert!(!block.verify_signature(&keypair.public_key));
    }
}
