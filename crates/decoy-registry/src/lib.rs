// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # decoy_registry
//!
//! Layout helpers for values written into registry-style key-value stores.
//!
//! - [`disperse_string`]: interleaves every character with a zero marker, the
//!   layout of a null-separated wide-character string.
//! - [`pack_bytes`]: flattens a sequence of [`RegistryElement`]s (single-byte
//!   integers and characters) into a contiguous byte buffer.
//!
//! Both are pure and allocate their own output.
//!
//! ## Example
//!
//! ```rust
//! use decoy_registry::{disperse_to_elements, pack_bytes};
//!
//! let elements = disperse_to_elements("12");
//! let bytes = pack_bytes(&elements).expect("Failed to pack_bytes(..)");
//!
//! assert_eq!(bytes, vec![b'1', 0, b'2', 0]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod disperse;
mod element;
mod error;
mod pack;

pub use disperse::{Dispersed, disperse_chars, disperse_string, disperse_to_elements};
pub use element::RegistryElement;
pub use error::PackError;
pub use pack::pack_bytes;
