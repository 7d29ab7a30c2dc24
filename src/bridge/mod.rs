// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the method-call boundary to the wallet engine.
//!
//! The bridge is a pure marshalling layer: it serializes method descriptors into the
//! engine's request envelope, hands them to a [`Transport`], and unwraps the response
//! envelope. It performs no retries and no domain validation, and it surfaces engine
//! errors to the caller unmodified.

mod client;
mod config;
mod error;
mod request;
mod responses;

use async_trait::async_trait;

pub use self::{
    client::Bridge,
    config::BridgeConfig,
    error::BridgeError,
    request::BridgeRequest,
    responses::{BridgeResponse, EngineError},
};

/// An opaque transport failure.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// The transport carrying serialized requests to the engine and raw responses back.
///
/// Implementations deliver each request to exactly one engine and return its response
/// envelope without interpreting it. The in-process FFI and IPC transports live with
/// the engine, not in this crate.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request envelope to the engine and returns its raw response.
    async fn send(&self, request: serde_json::Value) -> Result<serde_json::Value, TransportError>;
}
