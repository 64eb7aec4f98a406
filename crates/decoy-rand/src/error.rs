// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Failure to produce the requested number of random bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The OS generator refused the request.
    #[error("OS entropy source failed to fill {requested} bytes: {cause}")]
    Os {
        /// Bytes asked for.
        requested: usize,
        /// Error reported by `getrandom`.
        cause: getrandom::Error,
    },

    /// A finite source ran out before the request could be served.
    #[error("entropy exhausted: {requested} bytes requested, {remaining} remaining")]
    Exhausted {
        /// Bytes asked for.
        requested: usize,
        /// Bytes the source still held.
        remaining: usize,
    },
}

impl EntropyError {
    /// Number of bytes the failed request asked for.
    pub fn requested(&self) -> usize {
        match *self {
            Self::Os { requested, .. } | Self::Exhausted { requested, .. } => requested,
        }
    }
}
