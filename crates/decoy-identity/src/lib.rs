// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # decoy_identity
//!
//! Generators for randomized identity-like values.
//!
//! ## Generators
//!
//! - [`random_hostname`], [`random_username`], [`random_mac_address`]: uniform
//!   choice from the lists held by an [`IdentityData`]
//! - [`random_unix_time`]: Unix timestamp between two `DD.MM.YYYY` dates
//! - [`random_digit_string`]: string of decimal digits
//! - [`random_volume_id`]: `XXXX-XXXX` hex volume serial
//! - [`is_x64_os`]: whether the OS reports a 64-bit machine
//!
//! Every generator takes its randomness explicitly (an [`rand::Rng`] or an
//! [`EntropySource`](decoy_rand::EntropySource)). [`IdentityGenerator`] bundles
//! both with an [`IdentityData`].
//!
//! ## Example
//!
//! ```rust
//! use decoy_identity::IdentityGenerator;
//!
//! let mut generator = IdentityGenerator::from_entropy().expect("Failed to seed generator");
//!
//! let hostname = generator.hostname().expect("Failed to pick hostname").to_owned();
//! let serial = generator.digit_string(12);
//! let volume_id = generator.volume_id().expect("Failed to generate volume id");
//!
//! assert_eq!(serial.len(), 12);
//! assert_eq!(volume_id.len(), 9);
//! assert!(!hostname.is_empty());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod choice;
mod data;
mod digits;
mod error;
mod generator;
mod platform;
mod unix_time;
mod volume;

pub use choice::{random_hostname, random_mac_address, random_username};
pub use data::IdentityData;
pub use digits::random_digit_string;
pub use error::IdentityError;
pub use generator::IdentityGenerator;
pub use platform::{is_x64_os, machine_is_64bit, machine_name};
pub use unix_time::{DATE_FORMAT, parse_date, random_unix_time};
pub use volume::random_volume_id;
