// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the fixed-length ids of stateful ledger objects.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{util::prefix_hex_bytes, ModelError};

macro_rules! def_ledger_id {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(with = "prefix_hex_bytes")] pub [u8; Self::LENGTH]);

        impl $name {
            /// Length of the id in bytes.
            pub const LENGTH: usize = $len;

            /// Converts the id to its `0x`-prefixed hex representation.
            pub fn to_hex(&self) -> String {
                prefix_hex::encode(self.0.as_ref())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(prefix_hex::decode(s)?))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        #[cfg(feature = "rand")]
        impl $name {
            /// Generates a random id.
            pub fn rand() -> Self {
                Self(::rand::Rng::gen(&mut ::rand::thread_rng()))
            }
        }
    };
}

def_ledger_id!(
    /// Uniquely identifies an alias output chain.
    AliasId,
    32
);
def_ledger_id!(
    /// Uniquely identifies an NFT output chain.
    NftId,
    32
);
def_ledger_id!(
    /// Uniquely identifies a foundry output.
    FoundryId,
    38
);
def_ledger_id!(
    /// Uniquely identifies a class of native tokens, minted by a single foundry.
    TokenId,
    38
);
