// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A single element of a mixed registry payload.
///
/// Payloads handed to [`pack_bytes`](crate::pack_bytes) mix raw byte values and
/// characters. Anything else is carried as [`RegistryElement::Unsupported`] and
/// skipped when packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryElement {
    /// Integer that must lie in `0..=255`.
    Int(i64),
    /// Character whose code point must be at most `0xFF`.
    Char(char),
    /// Element with no byte representation. Packing drops it.
    Unsupported,
}

impl RegistryElement {
    /// Returns `true` unless the element is [`RegistryElement::Unsupported`].
    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl From<u8> for RegistryElement {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for RegistryElement {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<char> for RegistryElement {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}
