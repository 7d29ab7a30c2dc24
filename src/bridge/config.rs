// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration of the [`Bridge`](super::Bridge) client.
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    #[serde(with = "humantime_serde")]
    pub(crate) request_timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl BridgeConfig {
    const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Creates a new [`BridgeConfig`] with the default request timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time to wait for the engine to answer a request.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Returns the configured request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
