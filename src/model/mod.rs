// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the wire types shared with the engine.
//!
//! All types in this module serialize to the exact JSON shapes the engine reads and
//! writes. Tagged types carry a numeric `type` field whose values are fixed by the
//! wire format and must never change.

mod address;
mod error;
mod id;
mod signature;
mod unlock;
pub(crate) mod util;

pub use self::{
    address::Bech32Address,
    error::ModelError,
    id::{AliasId, FoundryId, NftId, TokenId},
    signature::Signature,
    unlock::Unlock,
};
