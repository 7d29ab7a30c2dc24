// Copyright 2023 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use derive_more::From;
use thiserror::Error;

/// Errors that can arise while parsing wire model types from their string forms.
///
/// Domain validation (address checksums, reference-index bounds, signature
/// verification) is the engine's concern and never surfaces here.
#[allow(missing_docs)]
#[derive(Debug, Error, From)]
pub enum ModelError {
    #[error("invalid hex representation: {0:?}")]
    InvalidHex(prefix_hex::Error),
}
