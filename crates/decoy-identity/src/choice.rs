// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::data::IdentityData;
use crate::error::IdentityError;

fn choose_from<'a, R: Rng + ?Sized>(
    rng: &mut R,
    list: &'a [String],
    kind: &'static str,
) -> Result<&'a str, IdentityError> {
    debug!("Length of {kind} list is {}", list.len());

    list.choose(rng)
        .map(String::as_str)
        .ok_or(IdentityError::EmptyList(kind))
}

/// Picks a hostname uniformly from `data`.
///
/// # Errors
///
/// Returns [`IdentityError::EmptyList`] if there are no hostnames.
pub fn random_hostname<'a, R: Rng + ?Sized>(
    rng: &mut R,
    data: &'a IdentityData,
) -> Result<&'a str, IdentityError> {
    choose_from(rng, data.hostnames(), "hostname")
}

/// Picks a username uniformly from `data`.
///
/// # Errors
///
/// Returns [`IdentityError::EmptyList`] if there are no usernames.
pub fn random_username<'a, R: Rng + ?Sized>(
    rng: &mut R,
    data: &'a IdentityData,
) -> Result<&'a str, IdentityError> {
    choose_from(rng, data.usernames(), "username")
}

/// Picks a MAC address uniformly from `data`.
///
/// # Errors
///
/// Returns [`IdentityError::EmptyList`] if there are no MAC addresses.
pub fn random_mac_address<'a, R: Rng + ?Sized>(
    rng: &mut R,
    data: &'a IdentityData,
) -> Result<&'a str, IdentityError> {
    choose_from(rng, data.mac_addresses(), "MAC address")
}
