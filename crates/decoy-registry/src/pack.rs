// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use log::trace;

use crate::element::RegistryElement;
use crate::error::PackError;

/// Packs a mixed sequence into one contiguous byte buffer.
///
/// - [`RegistryElement::Int`] emits its value as a single (little-endian) byte.
/// - [`RegistryElement::Char`] emits its code point as a single byte.
/// - [`RegistryElement::Unsupported`] emits nothing.
///
/// Bytes keep input order, so the output length equals the number of
/// supported elements.
///
/// # Errors
///
/// Returns [`PackError::IntOutOfRange`] or [`PackError::CharOutOfRange`] for the
/// first element that does not fit in a byte. No partial buffer is returned.
///
/// # Example
///
/// ```
/// use decoy_registry::{RegistryElement, pack_bytes};
///
/// let elements = [
///     RegistryElement::Int(0),
///     RegistryElement::Int(1),
///     RegistryElement::Int(255),
///     RegistryElement::Char('A'),
/// ];
///
/// assert_eq!(pack_bytes(&elements).unwrap(), vec![0, 1, 255, 65]);
/// assert!(pack_bytes(&[RegistryElement::Int(256)]).is_err());
/// ```
pub fn pack_bytes(elements: &[RegistryElement]) -> Result<Vec<u8>, PackError> {
    let mut bytes = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        match *element {
            RegistryElement::Int(value) => {
                let byte =
                    u8::try_from(value).map_err(|_| PackError::IntOutOfRange { index, value })?;
                bytes.push(byte);
            }
            RegistryElement::Char(value) => {
                let byte =
                    u8::try_from(value).map_err(|_| PackError::CharOutOfRange { index, value })?;
                bytes.push(byte);
            }
            RegistryElement::Unsupported => {
                trace!("pack_bytes: skipping unsupported element at index {index}");
            }
        }
    }

    Ok(bytes)
}
