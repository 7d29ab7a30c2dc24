// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wallet_bridge::{
    bridge::{Bridge, BridgeConfig, BridgeError},
    method::{AliasOutputParams, Burn, SyncOptions},
    model::AliasId,
};

use crate::common::{BrokenPipe, FakeEngine, UnresponsiveEngine};

#[tokio::test]
async fn test_create_alias_output_request_envelope() {
    let bridge = Bridge::new(FakeEngine::new());
    let params = AliasOutputParams::new()
        .with_address("rms1qztwng6cty8cfm9gdemmp3ejwt0efs2g6hy56q9zkq3c9vve7r9axkl6pq8")
        .with_metadata("0x42");
    bridge.create_alias_output(0, Some(params), None).await.unwrap();

    let requests = bridge.transport().requests();
    assert_eq!(
        requests,
        vec![json!({
            "name": "callAccountMethod",
            "data": {
                "accountIndex": 0,
                "method": {
                    "name": "createAliasOutput",
                    "data": {
                        "params": {
                            "address": "rms1qztwng6cty8cfm9gdemmp3ejwt0efs2g6hy56q9zkq3c9vve7r9axkl6pq8",
                            "metadata": "0x42",
                        },
                    },
                },
            },
        })]
    );
}

#[tokio::test]
async fn test_absent_address_is_not_sent() {
    let bridge = Bridge::new(FakeEngine::new());
    let params = AliasOutputParams::new().with_metadata("0x42");
    bridge.create_alias_output(1, Some(params), None).await.unwrap();

    let requests = bridge.transport().requests();
    let params = &requests[0]["data"]["method"]["data"]["params"];
    assert!(params.get("address").is_none());
    assert_eq!(params["metadata"], json!("0x42"));
}

#[tokio::test]
async fn test_ok_payload_is_returned_verbatim() {
    let payload = json!({ "transactionId": "0x2a", "blockId": null });
    let bridge = Bridge::new(FakeEngine::with_responses([json!({
        "type": "ok",
        "payload": payload.clone(),
    })]));
    let response = bridge.sync_account(0, Some(SyncOptions::new())).await.unwrap();
    assert_eq!(response, payload);
}

#[tokio::test]
async fn test_engine_error_is_passed_through() {
    let bridge = Bridge::new(FakeEngine::with_responses([json!({
        "type": "error",
        "payload": { "type": "insufficientFunds", "error": "not enough funds to cover the deposit" },
    })]));
    let err = bridge.create_alias_output(0, None, None).await.unwrap_err();
    match err {
        BridgeError::Engine(e) => {
            assert_eq!(e.kind, "insufficientFunds");
            assert_eq!(e.message, "not enough funds to cover the deposit");
        }
        e => panic!("expected an engine error, got {e:?}"),
    }
}

#[tokio::test]
async fn test_malformed_response_envelope_fails() {
    let bridge = Bridge::new(FakeEngine::with_responses([json!({ "status": "fine" })]));
    let err = bridge.sync_account(0, None).await.unwrap_err();
    assert!(matches!(err, BridgeError::Response(_)));
}

#[tokio::test]
async fn test_transport_failure_is_surfaced() {
    let bridge = Bridge::new(BrokenPipe);
    let err = bridge.sync_account(0, None).await.unwrap_err();
    assert!(matches!(err, BridgeError::Transport(_)));
}

#[tokio::test]
async fn test_unresponsive_engine_times_out() {
    let bridge = Bridge::with_config(
        UnresponsiveEngine,
        BridgeConfig::new().with_request_timeout(Duration::from_millis(20)),
    );
    let err = bridge.sync_account(0, None).await.unwrap_err();
    assert!(matches!(err, BridgeError::Timeout(_)));
}

#[tokio::test]
async fn test_burn_method_envelope() {
    let bridge = Bridge::new(FakeEngine::new());
    let alias_id = AliasId([0xAB; AliasId::LENGTH]);
    bridge.burn(3, Burn::from(alias_id), None).await.unwrap();

    let requests = bridge.transport().requests();
    assert_eq!(requests[0]["data"]["method"]["name"], json!("burn"));
    assert_eq!(
        requests[0]["data"]["method"]["data"]["burn"]["aliases"],
        json!([alias_id.to_hex()])
    );
}
