// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use derive_more::From;
use serde::{Deserialize, Serialize};

/// Engine-defined options applied when building the resulting transaction.
///
/// The schema of this value is owned by the engine; the bindings pass it through
/// unmodified.
#[derive(Clone, Debug, Default, PartialEq, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionOptions(pub serde_json::Value);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_options_pass_through() {
        let options = TransactionOptions::from(json!({ "allowMicroAmount": true }));
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({ "allowMicroAmount": true }));
    }
}
