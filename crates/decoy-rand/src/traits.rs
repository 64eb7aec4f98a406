// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Byte-oriented randomness used for ids and RNG seeds.
pub trait EntropySource {
    /// Fills all of `dest` or fails without a partial guarantee.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] carrying `dest.len()` as the requested size.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Draws exactly `N` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`EntropySource::fill_bytes`].
    fn fill_array<const N: usize>(&self) -> Result<[u8; N], EntropyError>
    where
        Self: Sized,
    {
        let mut bytes = [0u8; N];
        self.fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
