// Rust Bitcoin Library
// Written in 2014 by
//     Andrew Poelstra <apoelstra@wpsoftware.net>
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

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block of each
//! Factor network and its single transaction. The header fields are a
//! deterministic replay of the recorded values; the nonce search that
//! originally produced them happened once, long ago, and is not repeated
//! here.
//!

use std::default::Default;

use hashes::hex::FromHex;
use hashes::sha256d;

use blockdata::block::{Block, BlockHeader};
use blockdata::opcodes;
use blockdata::script;
use blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use network::constants::Network;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// How many satoshis are in "one factor"
pub const COIN_VALUE: u64 = 100_000_000;

/// The maximum value allowed in an output (useful for sanity checking,
/// since keeping everything below this value should prevent overflows
/// if you are doing anything remotely sane with monetary values).
pub fn max_money(_: Network) -> u64 {
    21_000_000 * COIN_VALUE
}

/// Constructs and returns the coinbase (and only) transaction of the Factor
/// genesis block. The output of this transaction cannot be spent as it did
/// not originally exist in the database.
fn factor_genesis_tx() -> Transaction {
    // Base
    let mut ret = Transaction {
        version: 1,
        lock_time: 0,
        input: vec![],
        output: vec![],
    };

    // Inputs
    let in_script = script::Builder::new().push_scriptint(486604799)
                                          .push_scriptint(4)
                                          .push_slice(b"Factor will take the lead in the blockchain innovation We provide new and essential technology to leap towards a future world connected via blockchains by 2019/06/15")
                                          .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: MAX_SEQUENCE,
    });

    // Outputs
    let out_script = script::Builder::new()
        .push_slice(&Vec::<u8>::from_hex("043391442086970e36631e2ef93b98b641cc75f947dd9fc233d94068f77416ea1452f397da24a0af6a305cac07478f5f0a6afe4f82f8b37c1d2bf2ccf6b5984a7f").unwrap())
        .push_opcode(opcodes::all::OP_CHECKSIG)
        .into_script();
    ret.output.push(TxOut {
        value: 50 * COIN_VALUE,
        script_pubkey: out_script
    });

    // end
    ret
}

/// Constructs and returns the genesis block of the given network
pub fn genesis_block(network: Network) -> Block {
    let txdata = vec![factor_genesis_tx()];
    let hash: sha256d::Hash = txdata[0].txid().into();
    let merkle_root = hash.into();

    match network {
        // The unit test network replays the production genesis block.
        Network::Main | Network::UnitTest => {
            Block {
                header: BlockHeader {
                    version: 1,
                    prev_blockhash: Default::default(),
                    merkle_root,
                    time: 1560538987,
                    bits: 0x1e0ffff0,
                    nonce: 737969,
                },
                txdata,
            }
        }
        Network::Testnet => {
            Block {
                header: BlockHeader {
                    version: 1,
                    prev_blockhash: Default::default(),
                    merkle_root,
                    time: 1560539036,
                    bits: 0x1e0ffff0,
                    nonce: 2129233,
                },
                txdata,
            }
        }
        Network::Regtest => {
            Block {
                header: BlockHeader {
                    version: 1,
                    prev_blockhash: Default::default(),
                    merkle_root,
                    time: 1560539036,
                    bits: 0x207fffff,
                    nonce: 0,
                },
                txdata,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::default::Default;
    use hex::decode as hex_decode;

    use blockdata::constants::{factor_genesis_tx, genesis_block};
    use blockdata::constants::{COIN_VALUE, MAX_SEQUENCE, max_money};
    use consensus::encode::{serialize, serialize_hex};
    use network::constants::Network;

    #[test]
    fn factor_genesis_first_transaction() {
        let gen = factor_genesis_tx();

        assert_eq!(gen.version, 1);
        assert_eq!(gen.input.len(), 1);
        assert!(gen.is_coin_base());
        assert_eq!(gen.input[0].previous_output.txid, Default::default());
        assert_eq!(gen.input[0].previous_output.vout, 0xFFFFFFFF);
        assert_eq!(serialize(&gen.input[0].script_sig),
                   hex_decode("ae04ffff001d01044ca5466163746f722077696c6c2074616b6520746865206c65616420696e2074686520626c6f636b636861696e20696e6e6f766174696f6e2057652070726f76696465206e657720616e6420657373656e7469616c20746563686e6f6c6f677920746f206c65617020746f776172647320612066757475726520776f726c6420636f6e6e65637465642076696120626c6f636b636861696e7320627920323031392f30362f3135").unwrap());

        assert_eq!(gen.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(gen.output.len(), 1);
        assert_eq!(serialize(&gen.output[0].script_pubkey),
                   hex_decode("4341043391442086970e36631e2ef93b98b641cc75f947dd9fc233d94068f77416ea1452f397da24a0af6a305cac07478f5f0a6afe4f82f8b37c1d2bf2ccf6b5984a7fac").unwrap());
        assert_eq!(gen.output[0].value, 50 * COIN_VALUE);
        assert_eq!(gen.lock_time, 0);

        assert_eq!(format!("{:x}", gen.txid()),
                   "b3a5de73b0a29dbf9231bc834b28692a19f73efaf44be3cfc1b80b961ac806ac".to_string());
    }

    #[test]
    fn main_genesis_full_block() {
        let gen = genesis_block(Network::Main);

        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, Default::default());
        assert_eq!(format!("{:x}", gen.header.merkle_root),
                   "b3a5de73b0a29dbf9231bc834b28692a19f73efaf44be3cfc1b80b961ac806ac".to_string());
        assert!(gen.check_merkle_root());
        assert_eq!(gen.header.time, 1560538987);
        assert_eq!(gen.header.bits, 0x1e0ffff0);
        assert_eq!(gen.header.nonce, 737969);
        assert_eq!(
            serialize_hex(&gen.header),
            "010000000000000000000000000000000000000000000000000000000000000000000000ac06c81a960bb8c1cfe34bf4fa3ef7192a69284b83bc3192bf9da2b073dea5b36bef035df0ff0f1eb1420b00"
        );
        assert_eq!(
            format!("{:x}", gen.header.block_hash()),
            "02fe32eefdb98cd36b5ac131d8d6b6c90f494b2bb7a8a74382435ba7674036ea".to_string()
        );
    }

    #[test]
    fn testnet_genesis_full_block() {
        let gen = genesis_block(Network::Testnet);
        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, Default::default());
        assert_eq!(
            format!("{:x}", gen.header.merkle_root),
            "b3a5de73b0a29dbf9231bc834b28692a19f73efaf44be3cfc1b80b961ac806ac".to_string()
        );
        assert_eq!(gen.header.time, 1560539036);
        assert_eq!(gen.header.nonce, 2129233);
        assert_eq!(
            format!("{:x}", gen.header.block_hash()),
            "ece3ac95302156d12d4259faffcc1337bfeac4dd5a38ab50554c70b34ea64680".to_string()
        );
    }

    #[test]
    fn regtest_genesis_full_block() {
        let gen = genesis_block(Network::Regtest);
        assert_eq!(gen.header.time, 1560539036);
        assert_eq!(gen.header.bits, 0x207fffff);
        assert_eq!(gen.header.nonce, 0);
        assert_eq!(
            format!("{:x}", gen.header.block_hash()),
            "f5987dacda8e2d8c33f1eea84d77df790c154fab9e50865f0e97181a28fe513c".to_string()
        );
    }

    #[test]
    fn unit_test_genesis_replays_main() {
        let gen = genesis_block(Network::UnitTest);
        assert_eq!(gen.block_hash(), genesis_block(Network::Main).block_hash());
    }

    #[test]
    fn max_money_is_sane() {
        assert_eq!(max_money(Network::Main), 21_000_000 * COIN_VALUE);
        assert_eq!(max_money(Network::Main), max_money(Network::Regtest));
    }
}
