// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::method::AccountMethod;

/// A request envelope sent across the bridge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "data", rename_all = "camelCase")]
pub enum BridgeRequest {
    /// Call a method on an account managed by the engine.
    #[serde(rename_all = "camelCase")]
    CallAccountMethod {
        /// The index of the account.
        account_index: u32,
        /// The method descriptor.
        method: AccountMethod,
    },
}
