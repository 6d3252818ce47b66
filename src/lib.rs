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

//! # Rust Factor Library
//!
//! This library holds the chain parameters of the Factor network: the
//! per-network consensus constants, the genesis blocks and their recorded
//! hashes, the hardcoded checkpoints and the bootstrap seed tables, together
//! with the registry through which a node selects the network it runs on.
//!
//! Parameters are assembled once, at startup, before any networking or
//! validation code runs. A hardcoded genesis hash that does not match the
//! block rebuilt from its recorded inputs is a build defect and aborts the
//! process immediately; there are no recoverable errors in this crate.
//!

#![crate_name = "factor"]
#![crate_type = "dylib"]
#![crate_type = "rlib"]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

// Re-exported dependencies.
#[macro_use] pub extern crate bitcoin_hashes as hashes;

extern crate primitive_types;
extern crate rand;

#[cfg(feature = "serde")] extern crate serde;
#[cfg(test)] extern crate hex;
#[cfg(all(test, feature = "serde"))] extern crate serde_test;

#[macro_use]
mod internal_macros;
pub mod network;
pub mod blockdata;
pub mod consensus;
// Do not remove: required in order to get hash types implementation macros to work correctly
#[allow(unused_imports)]
pub mod hash_types;

pub use crate::hash_types::*;
pub use crate::blockdata::block::Block;
pub use crate::blockdata::block::BlockHeader;
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::Transaction;
pub use crate::blockdata::transaction::TxIn;
pub use crate::blockdata::transaction::TxOut;
pub use crate::blockdata::transaction::OutPoint;
pub use crate::consensus::encode::VarInt;
pub use crate::consensus::checkpoints::CheckpointData;
pub use crate::consensus::params::Base58Type;
pub use crate::consensus::params::ModifiableParams;
pub use crate::consensus::params::Params;
pub use crate::consensus::params::ParamsRegistry;
pub use crate::network::constants::Network;
pub use crate::network::seeds::DnsSeed;
pub use crate::network::seeds::SeedAddress;
