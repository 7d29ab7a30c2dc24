// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use thiserror::Error;

use super::{responses::EngineError, TransportError};

/// Errors that can arise while marshalling a method call across the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The method descriptor could not be encoded into a request envelope.
    #[error("failed to encode request: {0}")]
    Request(#[source] serde_json::Error),
    /// The transport failed to deliver the request or receive the response.
    #[error("transport failed: {0}")]
    Transport(TransportError),
    /// The engine did not answer within the configured request timeout.
    #[error("no response from the engine within {0:?}")]
    Timeout(Duration),
    /// The response envelope could not be decoded.
    #[error("failed to decode response envelope: {0}")]
    Response(#[source] serde_json::Error),
    /// The engine rejected the call. The message is the engine's, unmodified.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
