// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use decoy_rand::EntropyError;
use thiserror::Error;

/// Errors returned by the identity generators.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The list to choose from holds no entries.
    #[error("{0} list is empty")]
    EmptyList(&'static str),

    /// A date string does not match `DD.MM.YYYY`.
    #[error("invalid date {input:?}, expected DD.MM.YYYY")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Parser error.
        source: chrono::ParseError,
    },

    /// The start of a time range lies after its end.
    #[error("range start {from} is after range end {to}")]
    InvertedRange {
        /// Range start, Unix seconds.
        from: i64,
        /// Range end, Unix seconds.
        to: i64,
    },

    /// The entropy source failed.
    #[error("{0}")]
    Entropy(#[from] EntropyError),
}
