// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing serde utility functions.

use serde::de;
use serde_json::Value;

/// A serde helper module for `0x`-prefixed hex encoding of fixed-size byte arrays.
pub mod prefix_hex_bytes {
    use serde::{de::Visitor, Deserializer, Serializer};

    /// Deserialize a `[u8; N]` from a `0x`-prefixed hex string.
    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
        [u8; N]: prefix_hex::FromHexPrefixed,
    {
        struct Helper<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for Helper<N>
        where
            [u8; N]: prefix_hex::FromHexPrefixed,
        {
            type Value = [u8; N];

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "a `0x`-prefixed hex string encoding {} bytes", N)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                prefix_hex::decode(value).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Helper)
    }

    /// Serialize a `[u8; N]` as a `0x`-prefixed hex string.
    pub fn serialize<S, const N: usize>(value: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&prefix_hex::encode(value.as_ref()))
    }
}

/// Reads the numeric `type` discriminator of a tagged wire object.
pub(crate) fn wire_tag<E: de::Error>(value: &Value, what: &'static str) -> Result<u8, E> {
    let tag = value
        .get("type")
        .and_then(Value::as_u64)
        .ok_or_else(|| E::custom(format!("missing {what} type")))?;
    u8::try_from(tag).map_err(|_| E::custom(format!("invalid {what} type: {tag}")))
}

/// Extracts and deserializes a named field of a tagged wire object.
pub(crate) fn wire_field<T, E>(value: &Value, what: &'static str, name: &'static str) -> Result<T, E>
where
    T: de::DeserializeOwned,
    E: de::Error,
{
    let field = value
        .get(name)
        .ok_or_else(|| E::custom(format!("missing {what} field `{name}`")))?;
    serde_json::from_value(field.clone()).map_err(E::custom)
}
