// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::model::Bech32Address;

/// Parameters for creating an alias output.
///
/// Every field is optional; the hex fields are passed to the engine as-is, so a value
/// that is not well-formed hex is only rejected once the request is submitted.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOutputParams {
    /// Bech32 encoded address which will control the alias. Defaults to the first
    /// address of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Bech32Address>,
    /// Immutable alias metadata, hex encoded bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immutable_metadata: Option<String>,
    /// Alias metadata, hex encoded bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Alias state metadata, hex encoded bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_metadata: Option<String>,
}

impl AliasOutputParams {
    /// Creates a new, empty [`AliasOutputParams`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the address which will control the alias.
    pub fn with_address(mut self, address: impl Into<Bech32Address>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the immutable alias metadata.
    pub fn with_immutable_metadata(mut self, immutable_metadata: impl Into<String>) -> Self {
        self.immutable_metadata = Some(immutable_metadata.into());
        self
    }

    /// Sets the alias metadata.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Sets the alias state metadata.
    pub fn with_state_metadata(mut self, state_metadata: impl Into<String>) -> Self {
        self.state_metadata = Some(state_metadata.into());
        self
    }
}
