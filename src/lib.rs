// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Typed binding surface for the wallet engine.
//!
//! The engine owns all wallet logic: signing, address derivation, transaction
//! construction, input selection and network submission. This crate only provides the
//! typed request descriptors and wire types that cross the method-call bridge, plus
//! the bridge client itself.

/// Module containing the method-call boundary to the engine.
pub mod bridge;
/// Module containing the account method descriptors.
pub mod method;
/// Module containing the wire types shared with the engine.
pub mod model;
