// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use wallet_bridge::bridge::{Transport, TransportError};

/// A stand-in engine that records every request and answers with canned responses.
pub struct FakeEngine {
    requests: Mutex<Vec<Value>>,
    responses: Mutex<VecDeque<Value>>,
}

impl FakeEngine {
    /// Creates a fake engine that answers every request with an empty `ok` envelope.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Creates a fake engine that answers the next requests with the given envelopes,
    /// then falls back to empty `ok` envelopes.
    pub fn with_responses(responses: impl IntoIterator<Item = Value>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    /// Returns the requests received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeEngine {
    async fn send(&self, request: Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| json!({ "type": "ok", "payload": null })))
    }
}

/// A transport whose engine never answers.
pub struct UnresponsiveEngine;

#[async_trait]
impl Transport for UnresponsiveEngine {
    async fn send(&self, _request: Value) -> Result<Value, TransportError> {
        std::future::pending().await
    }
}

/// A transport that fails to deliver anything.
pub struct BrokenPipe;

#[async_trait]
impl Transport for BrokenPipe {
    async fn send(&self, _request: Value) -> Result<Value, TransportError> {
        Err("pipe closed".into())
    }
}
