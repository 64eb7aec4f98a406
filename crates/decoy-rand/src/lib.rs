// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # decoy_rand
//!
//! Raw random bytes for the decoy generators.
//!
//! Volume ids are built straight from entropy bytes and every
//! `IdentityGenerator` seeds its RNG from 32 of them. Both go through
//! [`EntropySource`] so tests can script the exact bytes handed out.
//!
//! - [`OsEntropySource`]: bytes from the OS via `getrandom`
//! - [`EntropySource::fill_array`]: fixed-size draws (`[u8; 2]` volume halves,
//!   `[u8; 32]` seeds)
//! - `test_utils::ScriptedEntropySource`: replays a fixed byte sequence
//!   (`test-utils` feature)
//!
//! ## Example
//!
//! ```rust
//! use decoy_rand::{EntropySource, OsEntropySource};
//!
//! let seed: [u8; 32] = OsEntropySource::new()
//!     .fill_array()
//!     .expect("Failed to fill_array()");
//! assert_eq!(seed.len(), 32);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod os;
mod support;
mod traits;

pub use error::EntropyError;
pub use os::OsEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
