// Rust Bitcoin Library
// Written in 2014 by
//   Andrew Poelstra <apoelstra@wpsoftware.net>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//
// Changes for rust-factor is licensed as below.
// Copyright (c) 2019 The Factor developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Factor blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached, which
//! commits to an earlier block to form the blockchain.
//!

use hashes::{sha256d, Hash, HashEngine};

use blockdata::transaction::Transaction;
use consensus::encode::Encodable;
use hash_types::{BlockHash, TxMerkleNode};

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}

impl BlockHeader {
    /// Returns the block hash: the double SHA256 of the 80 byte consensus
    /// serialization of the header.
    pub fn block_hash(&self) -> BlockHash {
        let mut engine = BlockHash::engine();
        self.consensus_encode(&mut engine).expect("engines don't error");
        BlockHash::from_engine(engine)
    }
}

/// A Factor block, which is a collection of transactions with an attached
/// proof of work.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Computes the transaction merkle root. Returns `None` for a block
    /// without transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        if self.txdata.is_empty() {
            return None;
        }
        let mut hashes: Vec<sha256d::Hash> =
            self.txdata.iter().map(|tx| tx.txid().into()).collect();
        while hashes.len() > 1 {
            // An odd number of nodes duplicates the last one
            if hashes.len() % 2 != 0 {
                let last = hashes[hashes.len() - 1];
                hashes.push(last);
            }
            let mut row = Vec::with_capacity(hashes.len() / 2);
            for pair in hashes.chunks(2) {
                let mut engine = sha256d::Hash::engine();
                engine.input(&pair[0][..]);
                engine.input(&pair[1][..]);
                row.push(sha256d::Hash::from_engine(engine));
            }
            hashes = row;
        }
        Some(hashes[0].into())
    }

    /// Checks if merkle root of header matches merkle root of the
    /// transaction list.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }
}

impl_consensus_encoding!(BlockHeader, version, prev_blockhash, merkle_root, time, bits, nonce);
impl_consensus_encoding!(Block, header, txdata);

#[cfg(test)]
mod tests {
    use hashes::hex::FromHex;
    use hashes::sha256d;

    use blockdata::constants::genesis_block;
    use hash_types::TxMerkleNode;
    use network::constants::Network;

    use super::Block;

    #[test]
    fn merkle_root_of_single_transaction_is_its_txid() {
        let gen = genesis_block(Network::Main);
        assert!(gen.check_merkle_root());
        let txid: sha256d::Hash = gen.txdata[0].txid().into();
        assert_eq!(gen.compute_merkle_root().unwrap(), TxMerkleNode::from(txid));
    }

    #[test]
    fn merkle_root_of_transaction_pair() {
        let gen = genesis_block(Network::Main);
        let mut second = gen.txdata[0].clone();
        second.lock_time = 1;

        let block = Block {
            header: gen.header,
            txdata: vec![gen.txdata[0].clone(), second],
        };
        assert_eq!(
            block.compute_merkle_root().unwrap(),
            TxMerkleNode::from_hex(
                "a6a7b3d6da08d7f63defa6635c822a736fef5e52605bd73e72cbe44568c730fd"
            ).unwrap()
        );
        // The header still commits to the single-transaction root
        assert!(!block.check_merkle_root());
    }

    #[test]
    fn merkle_root_duplicates_odd_leaf() {
        let gen = genesis_block(Network::Main);
        let mut second = gen.txdata[0].clone();
        second.lock_time = 1;
        let mut third = gen.txdata[0].clone();
        third.lock_time = 2;

        let block = Block {
            header: gen.header,
            txdata: vec![gen.txdata[0].clone(), second, third],
        };
        assert_eq!(
            block.compute_merkle_root().unwrap(),
            TxMerkleNode::from_hex(
                "5965ff4395b79782cd83dd618b7d82831e06cf5ade43893db61609d65762ada6"
            ).unwrap()
        );
    }

    #[test]
    fn empty_block_has_no_merkle_root() {
        let gen = genesis_block(Network::Main);
        let block = Block { header: gen.header, txdata: vec![] };
        assert_eq!(block.compute_merkle_root(), None);
        assert!(!block.check_merkle_root());
    }
}
