// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;
use tracing::debug;

use super::{BridgeConfig, BridgeError, BridgeRequest, BridgeResponse, Transport};
use crate::method::{AccountMethod, AliasOutputParams, Burn, SyncOptions, TransactionOptions};

/// A client connection to the wallet engine.
///
/// The bridge holds no wallet state; every call is marshalled independently and the
/// descriptor is discarded once the response envelope has been unwrapped.
#[derive(Clone, Debug)]
pub struct Bridge<T> {
    transport: T,
    config: BridgeConfig,
}

impl<T: Transport> Bridge<T> {
    /// Creates a new [`Bridge`] over the given transport with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, BridgeConfig::default())
    }

    /// Creates a new [`Bridge`] over the given transport.
    pub fn with_config(transport: T, config: BridgeConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the configuration of the bridge.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls a method on the account at the given index and returns the engine's
    /// payload, whose shape is method-specific and owned by the engine.
    pub async fn call_account_method(
        &self,
        account_index: u32,
        method: AccountMethod,
    ) -> Result<Value, BridgeError> {
        let name = method.name();
        debug!(account_index, method = name, "calling account method");
        let request = serde_json::to_value(BridgeRequest::CallAccountMethod {
            account_index,
            method,
        })
        .map_err(BridgeError::Request)?;
        let response = tokio::time::timeout(self.config.request_timeout, self.transport.send(request))
            .await
            .map_err(|_| BridgeError::Timeout(self.config.request_timeout))?
            .map_err(BridgeError::Transport)?;
        match serde_json::from_value(response).map_err(BridgeError::Response)? {
            BridgeResponse::Ok(payload) => {
                debug!(method = name, "account method succeeded");
                Ok(payload)
            }
            BridgeResponse::Error(e) => {
                debug!(method = name, error = %e, "engine rejected account method");
                Err(e.into())
            }
        }
    }

    /// Creates an alias output on the account. When `params` is absent the engine uses
    /// its defaults for every parameter.
    pub async fn create_alias_output(
        &self,
        account_index: u32,
        params: Option<AliasOutputParams>,
        options: Option<TransactionOptions>,
    ) -> Result<Value, BridgeError> {
        self.call_account_method(account_index, AccountMethod::CreateAliasOutput { params, options })
            .await
    }

    /// Syncs the account against the ledger.
    pub async fn sync_account(
        &self,
        account_index: u32,
        options: Option<SyncOptions>,
    ) -> Result<Value, BridgeError> {
        self.call_account_method(account_index, AccountMethod::SyncAccount { options })
            .await
    }

    /// Burns ledger objects or amounts of native tokens owned by the account.
    pub async fn burn(
        &self,
        account_index: u32,
        burn: Burn,
        options: Option<TransactionOptions>,
    ) -> Result<Value, BridgeError> {
        self.call_account_method(account_index, AccountMethod::Burn { burn, options })
            .await
    }
}
