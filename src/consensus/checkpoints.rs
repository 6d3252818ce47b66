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

//! Checkpoints
//!
//! Hardcoded (height, hash) pairs treated as unconditionally trusted. The
//! validation engine uses them to refuse reorganizations that would rewrite
//! history at or below a checkpointed height, and the progress estimation
//! fields feed the sync percentage shown in user interfaces.
//!
//! What makes a good checkpoint block?
//! + Is surrounded by blocks with reasonable timestamps
//!   (no blocks before with a timestamp after, none after with
//!    timestamp before)
//! + Contains no strange transactions
//!
//! That judgment is made by a maintainer before a pair is added here; it is
//! not something this code can check.
//!

use hash_types::BlockHash;

/// The checkpoint table of one network, immutable after construction
#[derive(Debug, Clone)]
pub struct CheckpointData {
    checkpoints: Vec<(u32, BlockHash)>,
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: u64,
    /// Total number of transactions between genesis and the last checkpoint
    /// (the tx=... number in the SetBestChain debug.log lines)
    pub total_transactions: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// Builds a checkpoint table. The heights must be strictly increasing;
    /// a table violating that is a build defect and aborts immediately.
    pub fn new(
        checkpoints: Vec<(u32, BlockHash)>,
        last_checkpoint_time: u64,
        total_transactions: u64,
        transactions_per_day: f64,
    ) -> CheckpointData {
        assert!(
            checkpoints.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "checkpoint heights must be strictly increasing"
        );
        CheckpointData {
            checkpoints,
            last_checkpoint_time,
            total_transactions,
            transactions_per_day,
        }
    }

    /// The trusted hash at the given height, if that height is checkpointed
    pub fn checkpoint_at(&self, height: u32) -> Option<BlockHash> {
        self.checkpoints
            .binary_search_by_key(&height, |&(h, _)| h)
            .ok()
            .map(|i| self.checkpoints[i].1)
    }

    /// The height of the most recent checkpoint, `None` for an empty table
    pub fn last_checkpoint_height(&self) -> Option<u32> {
        self.checkpoints.last().map(|&(height, _)| height)
    }

    /// All checkpoints in increasing height order
    pub fn checkpoints(&self) -> &[(u32, BlockHash)] {
        &self.checkpoints
    }
}
