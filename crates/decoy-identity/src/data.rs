// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lists backing the list-based generators.

const DEFAULT_HOSTNAMES: &[&str] = &[
    "DESKTOP-4F7K2QJ",
    "DESKTOP-N3M8XRT",
    "LAPTOP-9HQ2V7CE",
    "WIN-8JD0KT3LPQ1",
    "OFFICE-PC-07",
    "ACCT-WS-112",
    "DEV-BOX-23",
    "HR-LAPTOP-05",
];

const DEFAULT_USERNAMES: &[&str] = &[
    "admin",
    "jsmith",
    "mgarcia",
    "a.kowalski",
    "lchen",
    "operator",
    "s.novak",
    "dpatel",
];

const DEFAULT_MAC_ADDRESSES: &[&str] = &[
    "00:1A:2B:3C:4D:5E",
    "3C:52:82:0F:9A:11",
    "70:85:C2:4E:B3:07",
    "D4:BE:D9:21:6C:F0",
    "F0:1F:AF:58:2D:93",
    "00:50:56:A1:7E:C4",
];

/// Hostname, username and MAC address lists.
///
/// [`IdentityData::default`] ships a small built-in set. Callers with their
/// own data use [`IdentityData::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityData {
    hostnames: Vec<String>,
    usernames: Vec<String>,
    mac_addresses: Vec<String>,
}

impl IdentityData {
    /// Builds identity data from caller-supplied lists.
    pub fn new<H, U, M>(hostnames: H, usernames: U, mac_addresses: M) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            hostnames: hostnames.into_iter().map(Into::into).collect(),
            usernames: usernames.into_iter().map(Into::into).collect(),
            mac_addresses: mac_addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Hostname list.
    pub fn hostnames(&self) -> &[String] {
        &self.hostnames
    }

    /// Username list.
    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    /// MAC address list.
    pub fn mac_addresses(&self) -> &[String] {
        &self.mac_addresses
    }
}

impl Default for IdentityData {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOSTNAMES.iter().copied(),
            DEFAULT_USERNAMES.iter().copied(),
            DEFAULT_MAC_ADDRESSES.iter().copied(),
        )
    }
}
