// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the account method descriptors.
//!
//! A descriptor is constructed per call, handed to the bridge and discarded afterwards.
//! It carries no wallet state and performs no validation; malformed field values (bad
//! hex, invalid Bech32) are rejected by the engine when the request is submitted.

mod alias;
mod burn;
mod options;
mod sync;

use serde::{Deserialize, Serialize};

pub use self::{alias::AliasOutputParams, burn::Burn, options::TransactionOptions, sync::SyncOptions};

/// A method to call on an account managed by the engine.
///
/// Serializes to the `{name, data}` envelope the engine expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "data", rename_all = "camelCase")]
pub enum AccountMethod {
    /// Create an alias output.
    #[serde(rename_all = "camelCase")]
    CreateAliasOutput {
        /// Parameters of the alias output. The engine falls back to its defaults for
        /// every field that is absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        params: Option<AliasOutputParams>,
        /// Options applied when building the resulting transaction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<TransactionOptions>,
    },
    /// Sync the account against the ledger.
    #[serde(rename_all = "camelCase")]
    SyncAccount {
        /// Options controlling the sync.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<SyncOptions>,
    },
    /// Burn ledger objects or amounts of native tokens.
    #[serde(rename_all = "camelCase")]
    Burn {
        /// What to burn.
        burn: Burn,
        /// Options applied when building the resulting transaction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<TransactionOptions>,
    },
}

impl AccountMethod {
    /// Returns the wire name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateAliasOutput { .. } => "createAliasOutput",
            Self::SyncAccount { .. } => "syncAccount",
            Self::Burn { .. } => "burn",
        }
    }
}
