// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::error::EntropyError;
use crate::traits::EntropySource;

type FillFn = fn(&mut [u8]) -> Result<(), getrandom::Error>;

/// Entropy straight from the operating system (`getrandom`).
#[derive(Clone, Copy)]
pub struct OsEntropySource {
    fill_fn: FillFn,
}

impl OsEntropySource {
    /// Source backed by `getrandom::fill`.
    pub const fn new() -> Self {
        Self {
            fill_fn: getrandom::fill,
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_fill_fn(fill_fn: FillFn) -> Self {
        Self { fill_fn }
    }
}

impl Default for OsEntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OsEntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OsEntropySource")
    }
}

impl EntropySource for OsEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (self.fill_fn)(dest).map_err(|cause| EntropyError::Os {
            requested: dest.len(),
            cause,
        })
    }
}
