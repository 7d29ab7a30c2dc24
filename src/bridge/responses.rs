// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A response envelope received from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum BridgeResponse {
    /// The method completed. The payload shape is method-specific and owned by the
    /// engine.
    Ok(serde_json::Value),
    /// The engine rejected the call.
    Error(EngineError),
}

/// An error reported by the engine, passed through to the caller verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("engine error ({kind}): {message}")]
pub struct EngineError {
    /// The engine's error category.
    #[serde(rename = "type")]
    pub kind: String,
    /// The engine's error message.
    #[serde(rename = "error")]
    pub message: String,
}
