// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`Unlock`] types.

use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    util::{wire_field, wire_tag},
    Signature,
};

/// The different types of unlocks authorizing the spending of transaction inputs.
///
/// Unlocks are ordered parallel to the inputs of the transaction they belong to; the
/// unlock at position `i` unlocks input `i`. The referencing variants point at an
/// earlier unlock in the same list which performs the actual unlocking; the engine
/// rejects references that do not point strictly backwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unlock {
    /// An unlock holding a signature over the transaction essence.
    Signature {
        /// The [`Signature`] of the unlock.
        signature: Signature,
    },
    /// An unlock referencing a previous unlock.
    Reference {
        /// The index of the referenced unlock.
        reference: u16,
    },
    /// An unlock referencing a previous unlock of a spent account output.
    Account {
        /// The index of the referenced unlock.
        reference: u16,
    },
    /// An unlock referencing a previous unlock of a spent anchor output.
    Anchor {
        /// The index of the referenced unlock.
        reference: u16,
    },
    /// An unlock referencing a previous unlock of a spent NFT output.
    Nft {
        /// The index of the referenced unlock.
        reference: u16,
    },
}

impl Unlock {
    /// Wire tag of a signature unlock.
    pub const SIGNATURE_TAG: u8 = 0;
    /// Wire tag of a reference unlock.
    pub const REFERENCE_TAG: u8 = 1;
    /// Wire tag of an account unlock.
    pub const ACCOUNT_TAG: u8 = 2;
    /// Wire tag of an anchor unlock.
    pub const ANCHOR_TAG: u8 = 3;
    /// Wire tag of an NFT unlock.
    pub const NFT_TAG: u8 = 4;

    /// Creates a new signature [`Unlock`].
    pub fn signature(signature: Signature) -> Self {
        Self::Signature { signature }
    }

    /// Creates a new reference [`Unlock`].
    pub fn reference(reference: u16) -> Self {
        Self::Reference { reference }
    }

    /// Creates a new account [`Unlock`].
    pub fn account(reference: u16) -> Self {
        Self::Account { reference }
    }

    /// Creates a new anchor [`Unlock`].
    pub fn anchor(reference: u16) -> Self {
        Self::Anchor { reference }
    }

    /// Creates a new NFT [`Unlock`].
    pub fn nft(reference: u16) -> Self {
        Self::Nft { reference }
    }

    /// Returns the wire tag of the unlock.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Signature { .. } => Self::SIGNATURE_TAG,
            Self::Reference { .. } => Self::REFERENCE_TAG,
            Self::Account { .. } => Self::ACCOUNT_TAG,
            Self::Anchor { .. } => Self::ANCHOR_TAG,
            Self::Nft { .. } => Self::NFT_TAG,
        }
    }
}

impl From<Signature> for Unlock {
    fn from(signature: Signature) -> Self {
        Self::Signature { signature }
    }
}

impl Serialize for Unlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fn referential<S: Serializer>(
            serializer: S,
            name: &'static str,
            tag: u8,
            reference: u16,
        ) -> Result<S::Ok, S::Error> {
            let mut s = serializer.serialize_struct(name, 2)?;
            s.serialize_field("type", &tag)?;
            s.serialize_field("reference", &reference)?;
            s.end()
        }

        match self {
            Self::Signature { signature } => {
                let mut s = serializer.serialize_struct("SignatureUnlock", 2)?;
                s.serialize_field("type", &Self::SIGNATURE_TAG)?;
                s.serialize_field("signature", signature)?;
                s.end()
            }
            Self::Reference { reference } => {
                referential(serializer, "ReferenceUnlock", Self::REFERENCE_TAG, *reference)
            }
            Self::Account { reference } => referential(serializer, "AccountUnlock", Self::ACCOUNT_TAG, *reference),
            Self::Anchor { reference } => referential(serializer, "AnchorUnlock", Self::ANCHOR_TAG, *reference),
            Self::Nft { reference } => referential(serializer, "NftUnlock", Self::NFT_TAG, *reference),
        }
    }
}

impl<'de> Deserialize<'de> for Unlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match wire_tag(&value, "unlock")? {
            Self::SIGNATURE_TAG => Self::Signature {
                signature: wire_field(&value, "unlock", "signature")?,
            },
            Self::REFERENCE_TAG => Self::Reference {
                reference: wire_field(&value, "unlock", "reference")?,
            },
            Self::ACCOUNT_TAG => Self::Account {
                reference: wire_field(&value, "unlock", "reference")?,
            },
            Self::ANCHOR_TAG => Self::Anchor {
                reference: wire_field(&value, "unlock", "reference")?,
            },
            Self::NFT_TAG => Self::Nft {
                reference: wire_field(&value, "unlock", "reference")?,
            },
            tag => return Err(de::Error::custom(format!("invalid unlock type: {tag}"))),
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use ::rand::Rng;

    use super::*;

    impl Unlock {
        /// Generates a random [`Unlock`].
        pub fn rand() -> Self {
            match ::rand::thread_rng().gen_range(0..5) {
                0 => Self::rand_signature(),
                1 => Self::rand_reference(),
                2 => Self::rand_account(),
                3 => Self::rand_anchor(),
                4 => Self::rand_nft(),
                _ => unreachable!(),
            }
        }

        /// Generates a random signature [`Unlock`].
        pub fn rand_signature() -> Self {
            Self::Signature {
                signature: Signature::rand(),
            }
        }

        /// Generates a random reference [`Unlock`].
        pub fn rand_reference() -> Self {
            Self::Reference {
                reference: rand_index(),
            }
        }

        /// Generates a random account [`Unlock`].
        pub fn rand_account() -> Self {
            Self::Account {
                reference: rand_index(),
            }
        }

        /// Generates a random anchor [`Unlock`].
        pub fn rand_anchor() -> Self {
            Self::Anchor {
                reference: rand_index(),
            }
        }

        /// Generates a random NFT [`Unlock`].
        pub fn rand_nft() -> Self {
            Self::Nft {
                reference: rand_index(),
            }
        }
    }

    fn rand_index() -> u16 {
        ::rand::thread_rng().gen_range(0..128)
    }
}

#[cfg(test)]
mod test {
    use serde_json::{from_value, json, to_value};

    use super::*;

    fn test_signature() -> Signature {
        Signature::Ed25519 {
            public_key: [0xA5; Signature::PUBLIC_KEY_LENGTH],
            signature: [0x5A; Signature::SIGNATURE_LENGTH],
        }
    }

    #[test]
    fn test_signature_unlock_wire() {
        let unlock = Unlock::signature(test_signature());
        let json = to_value(&unlock).unwrap();
        assert_eq!(json["type"], json!(0));
        assert_eq!(json["signature"]["type"], json!(0));
        assert_eq!(
            json["signature"]["publicKey"],
            json!(prefix_hex::encode([0xA5u8; 32].as_ref()))
        );
        assert_eq!(
            json["signature"]["signature"],
            json!(prefix_hex::encode([0x5Au8; 64].as_ref()))
        );
        assert_eq!(unlock, from_value::<Unlock>(json).unwrap());
    }

    #[test]
    fn test_reference_unlock_wire() {
        let unlock = Unlock::reference(3);
        let json = to_value(&unlock).unwrap();
        assert_eq!(json, json!({ "type": 1, "reference": 3 }));
        assert_eq!(unlock, from_value::<Unlock>(json).unwrap());
    }

    #[test]
    fn test_account_unlock_wire() {
        let unlock = Unlock::account(0);
        let json = to_value(&unlock).unwrap();
        assert_eq!(json, json!({ "type": 2, "reference": 0 }));
        assert_eq!(unlock, from_value::<Unlock>(json).unwrap());
    }

    #[test]
    fn test_anchor_unlock_wire() {
        let unlock = Unlock::anchor(42);
        let json = to_value(&unlock).unwrap();
        assert_eq!(json, json!({ "type": 3, "reference": 42 }));
        assert_eq!(unlock, from_value::<Unlock>(json).unwrap());
    }

    #[test]
    fn test_nft_unlock_wire() {
        let unlock = Unlock::nft(1);
        let json = to_value(&unlock).unwrap();
        assert_eq!(json, json!({ "type": 4, "reference": 1 }));
        assert_eq!(unlock, from_value::<Unlock>(json).unwrap());
    }

    #[test]
    fn test_unknown_tag_fails() {
        for tag in [5u64, 17, 255, 1000] {
            assert!(from_value::<Unlock>(json!({ "type": tag, "reference": 0 })).is_err());
        }
    }

    #[test]
    fn test_missing_tag_fails() {
        assert!(from_value::<Unlock>(json!({ "reference": 0 })).is_err());
        assert!(from_value::<Unlock>(json!({ "type": "signature" })).is_err());
    }

    #[test]
    fn test_missing_payload_fails() {
        assert!(from_value::<Unlock>(json!({ "type": 1 })).is_err());
        assert!(from_value::<Unlock>(json!({ "type": 0 })).is_err());
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_rand_unlock_roundtrip() {
        for _ in 0..100 {
            let unlock = Unlock::rand();
            let json = to_value(&unlock).unwrap();
            assert_eq!(unlock, from_value::<Unlock>(json).unwrap());
        }
    }
}
