// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use decoy_rand::EntropyError;
use decoy_rand::test_utils::ScriptedEntropySource;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::IdentityData;
use crate::error::IdentityError;
use crate::generator::IdentityGenerator;

#[test]
fn test_from_entropy_ok() {
    let mut generator = IdentityGenerator::from_entropy().expect("Failed to from_entropy()");

    assert!(generator.hostname().is_ok());
    assert!(generator.username().is_ok());
    assert!(generator.mac_address().is_ok());
    assert_eq!(generator.digit_string(8).len(), 8);
    assert!(generator.volume_id().is_ok());
}

#[test]
fn test_seeded_from_is_deterministic() {
    let seed_source = || ScriptedEntropySource::new([0x11; 32]);

    let mut a = IdentityGenerator::seeded_from(seed_source(), IdentityData::default()).unwrap();
    let mut b = IdentityGenerator::seeded_from(seed_source(), IdentityData::default()).unwrap();

    assert_eq!(a.digit_string(32), b.digit_string(32));
    assert_eq!(a.hostname().unwrap(), b.hostname().unwrap());
    assert_eq!(
        a.unix_time("01.01.2005", "01.01.2018").unwrap(),
        b.unix_time("01.01.2005", "01.01.2018").unwrap()
    );
}

#[test]
fn test_seed_and_volume_id_share_one_source() {
    let mut script = vec![0x22; 32];
    script.extend([0xbe, 0xef, 0xca, 0xfe]);

    let generator =
        IdentityGenerator::seeded_from(ScriptedEntropySource::new(script), IdentityData::default())
            .unwrap();

    assert_eq!(generator.volume_id().unwrap(), "beef-cafe");
    assert!(generator.volume_id().is_err());
}

#[test]
fn test_seeded_from_short_seed() {
    let entropy = ScriptedEntropySource::new([0u8; 8]);

    assert!(matches!(
        IdentityGenerator::seeded_from(entropy, IdentityData::default()),
        Err(IdentityError::Entropy(EntropyError::Exhausted {
            requested: 32,
            remaining: 8
        }))
    ));
}

#[test]
fn test_generator_uses_own_data() {
    let data = IdentityData::new(["h"], ["u"], ["m"]);
    let entropy = ScriptedEntropySource::new([0u8; 4]);
    let mut generator = IdentityGenerator::new(StdRng::seed_from_u64(5), entropy, data.clone());

    assert_eq!(generator.data(), &data);
    assert_eq!(generator.hostname().unwrap(), "h");
    assert_eq!(generator.username().unwrap(), "u");
    assert_eq!(generator.mac_address().unwrap(), "m");
    assert_eq!(generator.volume_id().unwrap(), "0000-0000");
}
