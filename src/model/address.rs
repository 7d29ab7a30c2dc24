// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use derive_more::From;
use serde::{Deserialize, Serialize};

/// The Bech32 string form of an address.
///
/// The checksum is not verified here; the engine rejects a malformed address when a
/// request carrying one is submitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bech32Address(String);

impl Bech32Address {
    /// Creates a new [`Bech32Address`] from its string form.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Bech32Address {
    fn from(address: &str) -> Self {
        Self(address.to_owned())
    }
}

impl fmt::Display for Bech32Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use serde_json::{from_value, json, to_value};

    use super::*;

    #[test]
    fn test_address_is_transparent() {
        let address = Bech32Address::from("rms1qztwng6cty8cfm9gdemmp3ejwt0efs2g6hy56q9zkq3c9vve7r9axkl6pq8");
        let json = to_value(&address).unwrap();
        assert_eq!(json, json!("rms1qztwng6cty8cfm9gdemmp3ejwt0efs2g6hy56q9zkq3c9vve7r9axkl6pq8"));
        assert_eq!(address, from_value::<Bech32Address>(json).unwrap());
    }
}
