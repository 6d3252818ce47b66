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

//! Chain parameters
//!
//! This module provides the predefined set of parameters for each Factor
//! network, and the registry through which a node selects the set it runs
//! on. Every set is assembled exactly once, before networking and
//! validation start, and is immutable afterwards; the single sanctioned
//! exception is the unit test network, whose consensus knobs can be turned
//! through [ModifiableParams](struct.ModifiableParams.html).
//!
//! A derived network starts from the fully built parameters of its base
//! network and applies an explicit list of overrides: the test network
//! derives from the production network, the regression test network from the
//! test network, and the unit test network from the production network
//! again. There is no runtime inheritance; the set of networks is closed.
//!

use hashes::hex::FromHex;
use primitive_types::U256;

use blockdata::block::Block;
use blockdata::constants::genesis_block;
use consensus::checkpoints::CheckpointData;
use hash_types::{BlockHash, TxMerkleNode};
use network::constants::Network;
use network::seeds::{self, DnsSeed, SeedAddress};

/// The kinds of prefix bytes handed to the base58 encoder when keys and
/// script hashes are rendered as human-presentable strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Type {
    /// Prefix of pay-to-pubkey-hash addresses
    PubkeyAddress,
    /// Prefix of pay-to-script-hash addresses
    ScriptAddress,
    /// Prefix of WIF encoded secret keys
    SecretKey,
    /// Prefix of BIP32 extended public keys
    ExtPublicKey,
    /// Prefix of BIP32 extended secret keys
    ExtSecretKey,
    /// BIP44 coin type
    ExtCoinType,
}

/// Parameters that influence chain consensus and node bootstrap for one
/// Factor network.
#[derive(Debug, Clone)]
pub struct Params {
    /// Network for which parameters are valid
    pub network: Network,
    /// Short string identifier of the network ("main", "test", ...)
    pub network_id: &'static str,
    /// Magic value prefixing every wire message, encoded little-endian
    pub magic: u32,
    /// Port the node listens on by convention
    pub default_port: u16,
    /// Proof of work limit value. It contains the lowest possible difficulty.
    pub pow_limit: U256,
    /// Number of blocks between block reward halvings
    pub subsidy_halving_interval: u32,
    /// Number of blocks in the upgrade window that must carry a new block
    /// version before it is enforced
    pub enforce_block_upgrade_majority: u32,
    /// Number of blocks in the upgrade window carrying a new block version
    /// after which outdated blocks are rejected
    pub reject_block_outdated_majority: u32,
    /// Number of recent blocks inspected for the two majorities above
    pub to_check_block_upgrade_majority: u32,
    /// Default number of built-in miner threads, 0 to disable mining
    pub miner_threads: u32,
    /// Difficulty retargeting period in seconds
    pub target_timespan: u64,
    /// Intended interval between blocks in seconds
    pub target_spacing: u64,
    /// The genesis block of this network
    pub genesis_block: Block,
    /// Hash of the genesis block, computed once at construction and checked
    /// against the recorded value
    pub genesis_hash: BlockHash,
    /// Public key of the alert system. Opaque here; signatures are verified
    /// by the alert processor.
    pub alert_key: Vec<u8>,
    /// Public key of the spork authority
    pub spork_key: Vec<u8>,
    /// Public key signing masternode payment votes
    pub masternode_payments_key: Vec<u8>,
    /// Unix time at which masternode payments begin
    pub start_masternode_payments: u64,
    /// Maximum number of transactions a mixing pool session may hold
    pub pool_max_transactions: u32,
    /// DNS seeds queried for peer addresses at startup
    pub dns_seeds: Vec<DnsSeed>,
    /// Fixed bootstrap peers, used when the DNS seeds are unreachable
    pub fixed_seeds: Vec<SeedAddress>,
    /// Hardcoded checkpoints of this network
    pub checkpoints: CheckpointData,
    base58_prefixes: [Vec<u8>; 6],
    /// Whether the RPC server refuses to start without a password
    pub require_rpc_password: bool,
    /// Whether mining requires connected peers
    pub mining_requires_peers: bool,
    /// Whether blocks may fall back to the minimum difficulty after a delay
    pub allow_min_difficulty_blocks: bool,
    /// Whether expensive consistency checks default to on
    pub default_consistency_checks: bool,
    /// Whether transactions must be standard to be relayed and mined
    pub require_standard: bool,
    /// Whether blocks are produced on RPC demand instead of by mining
    pub mine_blocks_on_demand: bool,
    /// Whether proof of work checks are skipped entirely
    pub skip_proof_of_work_check: bool,
    /// Whether the deprecated "testnet" field is reported over RPC
    pub testnet_to_be_deprecated_field_rpc: bool,
}

impl Params {
    /// Creates the parameter set for the given network. Aborts the process
    /// if a genesis block does not rebuild to its recorded hash, since that
    /// means the compiled constants are internally inconsistent.
    pub fn new(network: Network) -> Params {
        match network {
            Network::Main => Params::main(),
            Network::Testnet => Params::testnet(),
            Network::Regtest => Params::regtest(),
            Network::UnitTest => Params::unit_test(),
        }
    }

    /// The production network
    fn main() -> Params {
        let genesis = genesis_block(Network::Main);
        let genesis_hash = genesis.block_hash();
        assert_eq!(
            genesis_hash,
            BlockHash::from_hex("02fe32eefdb98cd36b5ac131d8d6b6c90f494b2bb7a8a74382435ba7674036ea").unwrap(),
            "main genesis hash does not match its recorded value"
        );
        assert_eq!(
            genesis.header.merkle_root,
            TxMerkleNode::from_hex("b3a5de73b0a29dbf9231bc834b28692a19f73efaf44be3cfc1b80b961ac806ac").unwrap(),
            "main genesis merkle root does not match its recorded value"
        );

        Params {
            network: Network::Main,
            network_id: "main",
            magic: Network::Main.magic(),
            default_port: 1993,
            pow_limit: U256::MAX >> 20, // Factor starting difficulty is 1 / 2^12
            subsidy_halving_interval: 210000,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 10 * 60 * 60, // Factor: 10 hours
            target_spacing: 1 * 1, // Factor: 1 minute
            genesis_block: genesis,
            genesis_hash,
            alert_key: Vec::from_hex("043391442086970e36631e2ef93b98b641cc75f947dd9fc233d94068f77416ea1452f397da24a0af6a305cac07478f5f0a6afe4f82f8b37c1d2bf2ccf6b5984a7f").unwrap(),
            spork_key: Vec::from_hex("048c11354f5f02e7c882894f4a4ffffdd63245fcc2a57c3848a21de6d42fd29645785850a866d6fc5633112e971d7fa73c17ece1f4f246b8aa80f4a009a1852a8c").unwrap(),
            masternode_payments_key: Vec::from_hex("048c11354f5f02e7c882894f4a4ffffdd63245fcc2a57c3848a21de6d42fd29645785850a866d6fc5633112e971d7fa73c17ece1f4f246b8aa80f4a009a1852a8c").unwrap(),
            start_masternode_payments: 1560538987,
            pool_max_transactions: 3,
            dns_seeds: vec![
                DnsSeed { name: "factor.io", host: "factor.io" },
                DnsSeed { name: "main.factor.io", host: "main.factor.io" },
                DnsSeed { name: "seed.factor.org", host: "seed.factor.org" },
            ],
            fixed_seeds: seeds::from_fixed_seeds(seeds::MAIN_SEEDS),
            checkpoints: CheckpointData::new(
                vec![(0, BlockHash::from_hex("02fe32eefdb98cd36b5ac131d8d6b6c90f494b2bb7a8a74382435ba7674036ea").unwrap())],
                1560538987, // * UNIX timestamp of last checkpoint block
                0,          // * total number of transactions between genesis and last checkpoint
                2800.0,     // * estimated number of transactions per day after checkpoint
            ),
            base58_prefixes: [
                vec![36],                      // Factor addresses start with 'F'
                vec![16],                      // Factor script addresses start with '7'
                vec![204],                     // Factor private keys start with '7' or 'X'
                vec![0x02, 0xFE, 0x52, 0xF8], // Factor BIP32 pubkeys start with 'drkv'
                vec![0x02, 0xFE, 0x52, 0xCC], // Factor BIP32 prvkeys start with 'drkp'
                vec![0x80, 0x00, 0x00, 0x05], // Factor BIP44 coin type is '5'
            ],
            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
        }
    }

    /// The public test network, derived from the production parameters
    fn testnet() -> Params {
        let mut params = Params::main();
        params.network = Network::Testnet;
        params.network_id = "test";
        params.magic = Network::Testnet.magic();
        params.default_port = 11993;
        params.enforce_block_upgrade_majority = 51;
        params.reject_block_outdated_majority = 75;
        params.to_check_block_upgrade_majority = 100;

        // The testnet genesis block carries its own timestamp and nonce so
        // the chain could start later than production.
        let genesis = genesis_block(Network::Testnet);
        params.genesis_hash = genesis.block_hash();
        assert_eq!(
            params.genesis_hash,
            BlockHash::from_hex("ece3ac95302156d12d4259faffcc1337bfeac4dd5a38ab50554c70b34ea64680").unwrap(),
            "testnet genesis hash does not match its recorded value"
        );
        params.genesis_block = genesis;

        params.alert_key = Vec::from_hex("0413c82b9fd5ebeddee56d0a8c71b7ae95af3526e2344009b02e176ffc238e266fce2a22e1d10e38441ae4d2ec8debe4696c56f33d1c0fcf92c43de889d4c09bd8").unwrap();
        params.spork_key = Vec::from_hex("0445dcb5c8b3a2ec5e06a1b8a926ab138d3f2b0e0779d5b907608498589a3ceb7a1c5615c562e9264eac26128170c90908e9fc785ba6668bef99630cada6ede03c").unwrap();
        params.masternode_payments_key = params.spork_key.clone();
        params.start_masternode_payments = 1560539036;
        params.pool_max_transactions = 2;

        params.dns_seeds = vec![
            DnsSeed { name: "factor.io", host: "factor.io" },
            DnsSeed { name: "main.factor.io", host: "main.factor.io" },
            DnsSeed { name: "seed.factor.org", host: "seed.factor.org" },
        ];
        params.fixed_seeds = seeds::from_fixed_seeds(seeds::TESTNET_SEEDS);
        params.checkpoints = CheckpointData::new(
            vec![(0, BlockHash::from_hex("ece3ac95302156d12d4259faffcc1337bfeac4dd5a38ab50554c70b34ea64680").unwrap())],
            1560539036,
            0,
            500.0,
        );
        params.base58_prefixes = [
            vec![139],                     // Testnet addresses start with 'x' or 'y'
            vec![19],                      // Testnet script addresses start with '8' or '9'
            vec![239],                     // Testnet private keys start with '9' or 'c'
            vec![0x3a, 0x80, 0x61, 0xa0], // Testnet BIP32 pubkeys start with 'DRKV'
            vec![0x3a, 0x80, 0x58, 0x37], // Testnet BIP32 prvkeys start with 'DRKP'
            vec![0x80, 0x00, 0x00, 0x01], // Testnet BIP44 coin type is '1'
        ];

        params.allow_min_difficulty_blocks = true;
        params.require_standard = false;
        params.testnet_to_be_deprecated_field_rpc = true;
        params
    }

    /// The local regression test network, derived from the test network
    fn regtest() -> Params {
        let mut params = Params::testnet();
        params.network = Network::Regtest;
        params.network_id = "regtest";
        params.magic = Network::Regtest.magic();
        params.default_port = 19931;
        params.subsidy_halving_interval = 150;
        params.enforce_block_upgrade_majority = 750;
        params.reject_block_outdated_majority = 950;
        params.to_check_block_upgrade_majority = 1000;
        params.miner_threads = 1;
        params.pow_limit = U256::MAX >> 1;

        let genesis = genesis_block(Network::Regtest);
        params.genesis_hash = genesis.block_hash();
        assert_eq!(
            params.genesis_hash,
            BlockHash::from_hex("f5987dacda8e2d8c33f1eea84d77df790c154fab9e50865f0e97181a28fe513c").unwrap(),
            "regtest genesis hash does not match its recorded value"
        );
        params.genesis_block = genesis;

        // Regtest mode doesn't have any fixed seeds or DNS seeds.
        params.fixed_seeds.clear();
        params.dns_seeds.clear();
        params.checkpoints = CheckpointData::new(
            vec![(0, BlockHash::from_hex("f5987dacda8e2d8c33f1eea84d77df790c154fab9e50865f0e97181a28fe513c").unwrap())],
            0,
            0,
            0.0,
        );

        params.require_rpc_password = false;
        params.mining_requires_peers = false;
        params.allow_min_difficulty_blocks = true;
        params.default_consistency_checks = true;
        params.require_standard = false;
        params.mine_blocks_on_demand = true;
        params.testnet_to_be_deprecated_field_rpc = false;
        params
    }

    /// The in-process unit test network, derived from the production
    /// parameters. It keeps the production genesis block and checkpoints.
    fn unit_test() -> Params {
        let mut params = Params::main();
        params.network = Network::UnitTest;
        params.network_id = "unittest";
        params.default_port = 18445;

        // Unit test mode doesn't have any fixed seeds or DNS seeds.
        params.fixed_seeds.clear();
        params.dns_seeds.clear();

        params.require_rpc_password = false;
        params.mining_requires_peers = false;
        params.default_consistency_checks = true;
        params.allow_min_difficulty_blocks = false;
        params.mine_blocks_on_demand = true;
        params
    }

    /// The prefix bytes the base58 encoder uses for the given kind on this
    /// network
    pub fn base58_prefix(&self, which: Base58Type) -> &[u8] {
        &self.base58_prefixes[which as usize]
    }

    /// Calculates the number of blocks between difficulty adjustments
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.target_timespan / self.target_spacing
    }
}

/// Owns the parameter set of every network and tracks which one is active.
///
/// A node builds one registry at startup, calls
/// [select](struct.ParamsRegistry.html#method.select) before anything reads
/// parameters, and threads `&ParamsRegistry` to the components that need it.
/// Reads need no synchronization because the sets never change; the unit
/// test network is mutated only through
/// [unit_test_params](struct.ParamsRegistry.html#method.unit_test_params) in
/// single-threaded test setup.
pub struct ParamsRegistry {
    main: Params,
    testnet: Params,
    regtest: Params,
    unit_test: Params,
    active: Option<Network>,
}

impl ParamsRegistry {
    /// Builds the parameter sets of all four networks. Any inconsistency
    /// between a genesis block and its recorded hash aborts here, before the
    /// node gets anywhere near the network.
    pub fn new() -> ParamsRegistry {
        ParamsRegistry {
            main: Params::new(Network::Main),
            testnet: Params::new(Network::Testnet),
            regtest: Params::new(Network::Regtest),
            unit_test: Params::new(Network::UnitTest),
            active: None,
        }
    }

    /// Makes the given network the active one. Must be called once during
    /// startup, before any call to [active](#method.active).
    pub fn select(&mut self, network: Network) {
        self.active = Some(network);
    }

    /// Returns the parameters of the active network. Calling this before
    /// [select](#method.select) is a startup ordering defect and aborts.
    pub fn active(&self) -> &Params {
        match self.active {
            Some(network) => self.for_network(network),
            None => panic!("no network has been selected"),
        }
    }

    /// Returns the parameters of a specific network, regardless of which one
    /// is active. Useful for cross-network constants such as displaying
    /// testnet addresses while running on the production network.
    pub fn for_network(&self, network: Network) -> &Params {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
            Network::UnitTest => &self.unit_test,
        }
    }

    /// Returns the mutation handle of the unit test network. Mutation is
    /// only ever permitted through this door, and only while the unit test
    /// network is active; asking for the handle otherwise aborts.
    pub fn unit_test_params(&mut self) -> ModifiableParams {
        assert_eq!(
            self.active,
            Some(Network::UnitTest),
            "modifiable parameters are only available on the unit test network"
        );
        ModifiableParams { params: &mut self.unit_test }
    }
}

/// A capability-restricted handle over the unit test network's parameters,
/// exposing only the consensus knobs test harnesses are allowed to turn.
/// Obtainable only from
/// [unit_test_params](struct.ParamsRegistry.html#method.unit_test_params),
/// so every other parameter set stays genuinely immutable.
pub struct ModifiableParams<'a> {
    params: &'a mut Params,
}

impl<'a> ModifiableParams<'a> {
    /// Overrides the number of blocks between block reward halvings
    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.params.subsidy_halving_interval = interval;
    }

    /// Overrides the majority required to enforce an upgraded block version
    pub fn set_enforce_block_upgrade_majority(&mut self, blocks: u32) {
        self.params.enforce_block_upgrade_majority = blocks;
    }

    /// Overrides the majority past which outdated blocks are rejected
    pub fn set_reject_block_outdated_majority(&mut self, blocks: u32) {
        self.params.reject_block_outdated_majority = blocks;
    }

    /// Overrides the size of the upgrade voting window
    pub fn set_to_check_block_upgrade_majority(&mut self, blocks: u32) {
        self.params.to_check_block_upgrade_majority = blocks;
    }

    /// Turns the default consistency checks on or off
    pub fn set_default_consistency_checks(&mut self, enable: bool) {
        self.params.default_consistency_checks = enable;
    }

    /// Allows or forbids minimum difficulty blocks
    pub fn set_allow_min_difficulty_blocks(&mut self, allow: bool) {
        self.params.allow_min_difficulty_blocks = allow;
    }

    /// Skips or restores proof of work checking
    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.params.skip_proof_of_work_check = skip;
    }
}

#[cfg(test)]
mod tests {
    use primitive_types::U256;

    use hash_types::BlockHash;
    use network::constants::Network;

    use super::{Base58Type, Params, ParamsRegistry};

    const BASE58_TYPES: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];

    #[test]
    fn every_network_constructs() {
        // Construction itself replays the genesis blocks and checks them
        // against the recorded hashes.
        for &network in [Network::Main, Network::Testnet, Network::Regtest, Network::UnitTest].iter() {
            let params = Params::new(network);
            assert_eq!(params.network, network);
            assert_eq!(params.genesis_hash, params.genesis_block.block_hash());
            assert!(params.genesis_block.txdata[0].is_coin_base());
        }
    }

    #[test]
    fn select_isolates_the_active_network() {
        let mut registry = ParamsRegistry::new();

        registry.select(Network::Main);
        assert_eq!(registry.active().default_port, 1993);
        registry.select(Network::Testnet);
        assert_eq!(registry.active().default_port, 11993);
        registry.select(Network::Regtest);
        assert_eq!(registry.active().default_port, 19931);
        registry.select(Network::UnitTest);
        assert_eq!(registry.active().default_port, 18445);

        // Cross-network reads are independent of the selection
        assert_eq!(registry.for_network(Network::Main).default_port, 1993);
    }

    #[test]
    #[should_panic(expected = "no network has been selected")]
    fn active_before_select_aborts() {
        let registry = ParamsRegistry::new();
        registry.active();
    }

    #[test]
    #[should_panic(expected = "unit test network")]
    fn modifiable_params_require_unit_test() {
        let mut registry = ParamsRegistry::new();
        registry.select(Network::Main);
        registry.unit_test_params();
    }

    #[test]
    fn modifiable_params_mutate_only_the_unit_test_network() {
        let mut registry = ParamsRegistry::new();
        registry.select(Network::UnitTest);

        {
            let mut handle = registry.unit_test_params();
            handle.set_subsidy_halving_interval(42);
            handle.set_enforce_block_upgrade_majority(5);
            handle.set_reject_block_outdated_majority(6);
            handle.set_to_check_block_upgrade_majority(7);
            handle.set_default_consistency_checks(false);
            handle.set_allow_min_difficulty_blocks(true);
            handle.set_skip_proof_of_work_check(true);
        }

        let active = registry.active();
        assert_eq!(active.subsidy_halving_interval, 42);
        assert_eq!(active.enforce_block_upgrade_majority, 5);
        assert_eq!(active.reject_block_outdated_majority, 6);
        assert_eq!(active.to_check_block_upgrade_majority, 7);
        assert!(!active.default_consistency_checks);
        assert!(active.allow_min_difficulty_blocks);
        assert!(active.skip_proof_of_work_check);

        // No other network moved
        assert_eq!(registry.for_network(Network::Main).subsidy_halving_interval, 210000);
        assert_eq!(registry.for_network(Network::Regtest).subsidy_halving_interval, 150);
        assert!(!registry.for_network(Network::Main).skip_proof_of_work_check);
    }

    #[test]
    fn regtest_is_maximally_permissive() {
        let main = Params::new(Network::Main);
        let regtest = Params::new(Network::Regtest);

        assert_eq!(main.pow_limit, U256::MAX >> 20);
        assert_eq!(regtest.pow_limit, U256::MAX >> 1);
        assert!(regtest.pow_limit > main.pow_limit);

        assert!(regtest.mine_blocks_on_demand);
        assert!(!main.mine_blocks_on_demand);
        assert!(!regtest.mining_requires_peers);
    }

    #[test]
    fn testnet_prefixes_differ_from_main() {
        let main = Params::new(Network::Main);
        let testnet = Params::new(Network::Testnet);

        for &which in BASE58_TYPES.iter() {
            assert_ne!(main.base58_prefix(which), testnet.base58_prefix(which));
        }
        assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[36]);
        assert_eq!(testnet.base58_prefix(Base58Type::PubkeyAddress), &[139]);
        assert_eq!(main.base58_prefix(Base58Type::ExtCoinType), &[0x80, 0x00, 0x00, 0x05]);
    }

    #[test]
    fn checkpoints_are_well_formed() {
        for &network in [Network::Main, Network::Testnet, Network::Regtest, Network::UnitTest].iter() {
            let params = Params::new(network);
            let checkpoints = params.checkpoints.checkpoints();
            assert!(!checkpoints.is_empty());
            assert!(checkpoints.windows(2).all(|pair| pair[0].0 < pair[1].0));
            assert!(checkpoints.iter().all(|&(_, hash)| hash != BlockHash::default()));
            // The height-0 checkpoint is the genesis block
            assert_eq!(params.checkpoints.checkpoint_at(0), Some(params.genesis_hash));
            assert_eq!(params.checkpoints.last_checkpoint_height(), Some(0));
        }
    }

    #[test]
    fn seed_tables_follow_the_network() {
        let main = Params::new(Network::Main);
        let testnet = Params::new(Network::Testnet);
        let regtest = Params::new(Network::Regtest);
        let unit_test = Params::new(Network::UnitTest);

        assert!(!main.fixed_seeds.is_empty());
        assert!(!main.dns_seeds.is_empty());
        assert!(!testnet.fixed_seeds.is_empty());
        assert!(regtest.fixed_seeds.is_empty());
        assert!(regtest.dns_seeds.is_empty());
        assert!(unit_test.fixed_seeds.is_empty());
        assert!(unit_test.dns_seeds.is_empty());

        assert!(main.fixed_seeds.iter().all(|s| s.address.port() == 1993));
        assert!(testnet.fixed_seeds.iter().all(|s| s.address.port() == 11993));
    }

    #[test]
    fn unit_test_network_shares_the_main_genesis() {
        let main = Params::new(Network::Main);
        let unit_test = Params::new(Network::UnitTest);

        assert_eq!(unit_test.genesis_hash, main.genesis_hash);
        assert_eq!(unit_test.checkpoints.checkpoint_at(0), main.checkpoints.checkpoint_at(0));
        assert_eq!(unit_test.magic, main.magic);
        assert_ne!(unit_test.default_port, main.default_port);
    }

    #[test]
    fn magics_are_distinct_across_real_networks() {
        let main = Params::new(Network::Main);
        let testnet = Params::new(Network::Testnet);
        let regtest = Params::new(Network::Regtest);

        assert_ne!(main.magic, testnet.magic);
        assert_ne!(main.magic, regtest.magic);
        assert_ne!(testnet.magic, regtest.magic);
    }

    #[test]
    fn retarget_interval_divides_evenly() {
        for &network in [Network::Main, Network::Testnet, Network::Regtest, Network::UnitTest].iter() {
            let params = Params::new(network);
            assert_eq!(params.target_timespan % params.target_spacing, 0);
            assert!(params.difficulty_adjustment_interval() > 0);
        }
    }
}
