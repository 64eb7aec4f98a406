// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use decoy_rand::EntropySource;

use crate::error::IdentityError;

/// Returns a random volume serial in the form `XXXX-XXXX` (lowercase hex).
///
/// Each half is two bytes drawn from `entropy`, high half first.
///
/// # Errors
///
/// Returns [`IdentityError::Entropy`] if the entropy source fails.
pub fn random_volume_id<E: EntropySource>(entropy: &E) -> Result<String, IdentityError> {
    let high = entropy.fill_array::<2>()?;
    let low = entropy.fill_array::<2>()?;

    Ok(format!("{}-{}", hex::encode(high), hex::encode(low)))
}
