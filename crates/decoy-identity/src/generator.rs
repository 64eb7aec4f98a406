// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use decoy_rand::{EntropySource, OsEntropySource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::choice::{random_hostname, random_mac_address, random_username};
use crate::data::IdentityData;
use crate::digits::random_digit_string;
use crate::error::IdentityError;
use crate::unix_time::random_unix_time;
use crate::volume::random_volume_id;

/// Bundles an RNG, an entropy source and identity lists.
///
/// # Example
///
/// ```rust
/// use decoy_identity::{IdentityData, IdentityGenerator};
/// use decoy_rand::OsEntropySource;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let data = IdentityData::new(["HOST-1"], ["alice"], ["00:11:22:33:44:55"]);
/// let mut generator =
///     IdentityGenerator::new(StdRng::seed_from_u64(7), OsEntropySource::new(), data);
///
/// assert_eq!(generator.hostname().unwrap(), "HOST-1");
/// assert_eq!(generator.username().unwrap(), "alice");
/// ```
#[derive(Debug)]
pub struct IdentityGenerator<R, E> {
    rng: R,
    entropy: E,
    data: IdentityData,
}

impl IdentityGenerator<StdRng, OsEntropySource> {
    /// Creates a generator over the default lists, seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Entropy`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, IdentityError> {
        Self::seeded_from(OsEntropySource::new(), IdentityData::default())
    }
}

impl<E: EntropySource> IdentityGenerator<StdRng, E> {
    /// Creates a generator whose [`StdRng`] is seeded from the first 32 bytes
    /// of `entropy`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Entropy`] if `entropy` fails.
    pub fn seeded_from(entropy: E, data: IdentityData) -> Result<Self, IdentityError> {
        let seed = entropy.fill_array::<32>()?;

        Ok(Self::new(StdRng::from_seed(seed), entropy, data))
    }
}

impl<R: Rng, E: EntropySource> IdentityGenerator<R, E> {
    /// Creates a generator from its parts.
    pub fn new(rng: R, entropy: E, data: IdentityData) -> Self {
        Self { rng, entropy, data }
    }

    /// Lists this generator draws from.
    pub fn data(&self) -> &IdentityData {
        &self.data
    }

    /// See [`random_hostname`].
    pub fn hostname(&mut self) -> Result<&str, IdentityError> {
        random_hostname(&mut self.rng, &self.data)
    }

    /// See [`random_username`].
    pub fn username(&mut self) -> Result<&str, IdentityError> {
        random_username(&mut self.rng, &self.data)
    }

    /// See [`random_mac_address`].
    pub fn mac_address(&mut self) -> Result<&str, IdentityError> {
        random_mac_address(&mut self.rng, &self.data)
    }

    /// See [`random_unix_time`].
    pub fn unix_time(&mut self, from_date: &str, to_date: &str) -> Result<i64, IdentityError> {
        random_unix_time(&mut self.rng, from_date, to_date)
    }

    /// See [`random_digit_string`].
    pub fn digit_string(&mut self, length: usize) -> String {
        random_digit_string(&mut self.rng, length)
    }

    /// See [`random_volume_id`].
    pub fn volume_id(&self) -> Result<String, IdentityError> {
        random_volume_id(&self.entropy)
    }
}
