// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::util::{wire_field, wire_tag};

/// A signature authorizing the spending of an input, tagged with its wire type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signature {
    /// An Ed25519 signature together with the public key that verifies it.
    Ed25519 {
        /// The public key of the signing keypair.
        public_key: [u8; Self::PUBLIC_KEY_LENGTH],
        /// The signature over the transaction essence.
        signature: [u8; Self::SIGNATURE_LENGTH],
    },
}

impl Signature {
    /// Length of an Ed25519 public key.
    pub const PUBLIC_KEY_LENGTH: usize = 32;
    /// Length of an Ed25519 signature.
    pub const SIGNATURE_LENGTH: usize = 64;
    /// Wire tag of an Ed25519 signature.
    pub const ED25519_TAG: u8 = 0;
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ed25519 { public_key, signature } => {
                let mut s = serializer.serialize_struct("Ed25519Signature", 3)?;
                s.serialize_field("type", &Self::ED25519_TAG)?;
                s.serialize_field("publicKey", &prefix_hex::encode(public_key.as_ref()))?;
                s.serialize_field("signature", &prefix_hex::encode(signature.as_ref()))?;
                s.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match wire_tag(&value, "signature")? {
            Self::ED25519_TAG => Self::Ed25519 {
                public_key: decode_bytes(&value, "publicKey")?,
                signature: decode_bytes(&value, "signature")?,
            },
            tag => return Err(de::Error::custom(format!("invalid signature type: {tag}"))),
        })
    }
}

fn decode_bytes<E: de::Error, const N: usize>(value: &Value, name: &'static str) -> Result<[u8; N], E>
where
    [u8; N]: prefix_hex::FromHexPrefixed,
{
    let hex = wire_field::<String, E>(value, "signature", name)?;
    prefix_hex::decode(&hex).map_err(|e| E::custom(format!("invalid signature field `{name}`: {e:?}")))
}

#[cfg(feature = "rand")]
mod rand {
    use ::rand::Rng;

    use super::*;

    impl Signature {
        /// Generates a random Ed25519 [`Signature`].
        pub fn rand() -> Self {
            let mut rng = ::rand::thread_rng();
            Self::Ed25519 {
                public_key: rng.gen(),
                signature: rng.gen(),
            }
        }
    }
}
