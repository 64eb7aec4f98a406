// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by [`pack_bytes`](crate::pack_bytes).
///
/// Every element must fit in a single byte. The first element that does not
/// aborts the whole call and no buffer is produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// An integer element lies outside `0..=255`.
    #[error("integer {value} at index {index} does not fit in a single byte")]
    IntOutOfRange {
        /// Position of the element in the input.
        index: usize,
        /// The rejected value.
        value: i64,
    },

    /// A character element has a code point above `0xFF`.
    #[error("character {value:?} at index {index} has a code point above 0xFF")]
    CharOutOfRange {
        /// Position of the element in the input.
        index: usize,
        /// The rejected character.
        value: char,
    },
}
