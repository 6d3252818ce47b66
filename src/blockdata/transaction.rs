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

//! Factor transactions
//!
//! A transaction describes a transfer of money. The only transaction this
//! crate ever constructs is the unspendable genesis coinbase, but the types
//! carry the full pre-segwit wire layout so that their serialization, and
//! with it every transaction id, is exact.
//!

use std::fmt;

use hashes::Hash;

use blockdata::script::Script;
use consensus::encode::Encodable;
use hash_types::Txid;

/// A reference to a transaction output
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct OutPoint {
    /// The referenced transaction's txid
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout
    pub vout: u32,
}

impl OutPoint {
    /// Creates a "null" `OutPoint`. This value is used for coinbase
    /// transactions because they don't have any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint {
            txid: Default::default(),
            vout: u32::max_value(),
        }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        OutPoint::null()
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

/// A transaction input, which defines old coins to be consumed
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TxIn {
    /// The reference to the previous output that is being used as an input
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to accept
    pub script_sig: Script,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFF
    /// to ignore this feature. This is generally never used since
    /// the miner behaviour cannot be enforced.
    pub sequence: u32,
}

/// A transaction output, which defines new coins to be created from old ones
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TxOut {
    /// The value of the output, in satoshis
    pub value: u64,
    /// The script which must satisfy for the output to be spent
    pub script_pubkey: Script,
}

/// A Factor transaction, which describes an authenticated movement of coins
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Transaction {
    /// The protocol version, should always be 1
    pub version: i32,
    /// Block number before which this transaction is valid, or 0 for
    /// valid immediately
    pub lock_time: u32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
}

impl Transaction {
    /// Computes the txid: the double SHA256 of the consensus serialization of
    /// the transaction.
    pub fn txid(&self) -> Txid {
        let mut enc = Txid::engine();
        self.consensus_encode(&mut enc).expect("engines don't error");
        Txid::from_engine(enc)
    }

    /// Is this a coin base transaction?
    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }
}

impl_consensus_encoding!(OutPoint, txid, vout);
impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);
impl_consensus_encoding!(TxOut, value, script_pubkey);
impl_consensus_encoding!(Transaction, version, input, output, lock_time);

#[cfg(test)]
mod tests {
    use super::{OutPoint, Transaction, TxIn};
    use blockdata::script::Script;

    #[test]
    fn outpoint_null() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.vout, 0xFFFFFFFF);
        assert_eq!(null, OutPoint::default());
        assert_eq!(
            format!("{}", null),
            "0000000000000000000000000000000000000000000000000000000000000000:4294967295"
        );
    }

    #[test]
    fn coinbase_detection() {
        let mut tx = Transaction {
            version: 1,
            lock_time: 0,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Script::new(),
                sequence: 0xFFFFFFFF,
            }],
            output: vec![],
        };
        assert!(tx.is_coin_base());

        tx.input[0].previous_output.vout = 0;
        assert!(!tx.is_coin_base());
    }
}
