// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Randomized identity-like values and the byte layouts used to store them in
//! registry-style key-value stores.
//!
//! # Crates
//!
//! - [`registry`]: string dispersal and byte packing for registry payloads
//! - [`identity`]: hostnames, usernames, MAC addresses, timestamps, digit
//!   strings, volume ids and the 64-bit host check
//! - [`entropy`]: entropy source abstraction backing the generators
//!
//! # Quick Start
//!
//! ```rust
//! use decoy::identity::IdentityGenerator;
//! use decoy::registry::{disperse_to_elements, pack_bytes};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut generator = IdentityGenerator::from_entropy()?;
//!
//!     // Product id written as a wide string value
//!     let product_id = generator.digit_string(20);
//!     let payload = pack_bytes(&disperse_to_elements(&product_id))?;
//!
//!     assert_eq!(payload.len(), 40);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Registry payload layout helpers.
pub mod registry {
    pub use decoy_registry::*;
}

/// Identity value generators.
pub mod identity {
    pub use decoy_identity::*;
}

/// Entropy sources.
pub mod entropy {
    pub use decoy_rand::*;
}
