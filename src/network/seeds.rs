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

//! Bootstrap seeds
//!
//! Hardcoded peer addresses used only to discover further peers when a node
//! starts with an empty address book. The fixed tables hold 16-byte
//! addresses (IPv4 mapped into IPv6, or plain IPv6) plus a port, the format
//! emitted by the seed generator script. DNS seed names are handed to the
//! address manager unresolved; no network I/O happens in this module.
//!

use std::net::{Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use network::constants::ServiceFlags;

/// One week in seconds
const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A compact fixed seed record as emitted by the seed generator
pub struct SeedSpec6 {
    /// 16 byte address, IPv4 mapped into IPv6 where applicable
    pub addr: [u8; 16],
    /// Port the peer listens on
    pub port: u16,
}

/// A DNS seed: a host serving A records that point at active peers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsSeed {
    /// Name identifying the seed operator
    pub name: &'static str,
    /// Hostname to query
    pub host: &'static str,
}

/// A bootstrap peer candidate produced from a fixed seed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedAddress {
    /// Socket address of the peer
    pub address: SocketAddr,
    /// Services the peer is assumed to provide
    pub services: ServiceFlags,
    /// Synthesized "last seen" timestamp in unix seconds, see
    /// [from_fixed_seeds](fn.from_fixed_seeds.html)
    pub last_seen: u64,
}

/// Converts a fixed seed table into usable peer addresses, in table order.
///
/// A node will only ever connect to one or two seed nodes because once it
/// connects, it will get a pile of addresses with newer timestamps. Seed
/// nodes are given a random "last seen" time of between one and two weeks
/// ago, so they fall behind any address learned from a live peer.
pub fn from_fixed_seeds(seeds: &[SeedSpec6]) -> Vec<SeedAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is set before the unix epoch")
        .as_secs();
    let mut rng = rand::thread_rng();
    seeds
        .iter()
        .map(|seed| {
            let ip = Ipv6Addr::from(seed.addr);
            let address = match ip.to_ipv4() {
                Some(v4) => SocketAddr::from((v4, seed.port)),
                None => SocketAddr::from((ip, seed.port)),
            };
            SeedAddress {
                address,
                services: ServiceFlags::NETWORK,
                last_seen: now - ONE_WEEK - rng.gen_range(1..ONE_WEEK),
            }
        })
        .collect()
}

/// Fixed seed entries for the production network, generated by
/// contrib/seeds/generate-seeds from nodes run by the project.
pub const MAIN_SEEDS: &'static [SeedSpec6] = &[
    SeedSpec6 { addr: [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0xff,0xff,0x68,0xee,0xb0,0x3d], port: 1993 },
    SeedSpec6 { addr: [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0xff,0xff,0x2d,0x4d,0x79,0xce], port: 1993 },
    SeedSpec6 { addr: [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0xff,0xff,0x95,0x1c,0xc9,0x58], port: 1993 },
    SeedSpec6 { addr: [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0xff,0xff,0xcf,0x94,0x09,0xc2], port: 1993 },
];

/// Fixed seed entries for the public test network.
pub const TESTNET_SEEDS: &'static [SeedSpec6] = &[
    SeedSpec6 { addr: [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0xff,0xff,0x2d,0x20,0xa6,0x77], port: 11993 },
    SeedSpec6 { addr: [0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0xff,0xff,0x6c,0x3d,0xaf,0x18], port: 11993 },
];
