// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Options controlling how the engine syncs an account against the ledger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncOptions {
    /// Address index from which to start syncing addresses.
    pub address_start_index: u32,
    /// Syncs even if the account was synced within the engine's minimum sync interval.
    pub force_syncing: bool,
    /// Also syncs transactions that are incoming to the account.
    pub sync_incoming_transactions: bool,
}

impl SyncOptions {
    /// Creates a new [`SyncOptions`] with the engine defaults.
    pub fn new() -> Self {
        Self::default()
    }
}
