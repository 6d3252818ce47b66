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

//! File defines types for hashes used throughout the library. These types are
//! needed in order to avoid mixing data of the same hash format (like
//! `sha256d`) but of different meaning (transaction id, block hash).

use hashes::{sha256d, Hash};

hash_newtype!(Txid, sha256d::Hash, 32, doc="A factor transaction hash/transaction ID.");
hash_newtype!(BlockHash, sha256d::Hash, 32, doc="A factor block hash.");
hash_newtype!(TxMerkleNode, sha256d::Hash, 32, doc="A hash of the Merkle tree branch or root for transactions.");

impl_hashencode!(Txid);
impl_hashencode!(BlockHash);
impl_hashencode!(TxMerkleNode);
