// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::element::RegistryElement;
use crate::error::PackError;
use crate::pack::pack_bytes;

#[test]
fn test_pack_mixed_elements() {
    let elements = [
        RegistryElement::Int(0),
        RegistryElement::Int(1),
        RegistryElement::Int(255),
        RegistryElement::Char('A'),
    ];

    assert_eq!(
        pack_bytes(&elements).expect("Failed to pack_bytes(..)"),
        vec![0, 1, 255, 65]
    );
}

#[test]
fn test_pack_empty() {
    assert_eq!(
        pack_bytes(&[]).expect("Failed to pack_bytes(..)"),
        Vec::<u8>::new()
    );
}

#[test]
fn test_pack_int_too_large() {
    let result = pack_bytes(&[RegistryElement::Int(256)]);

    assert_eq!(
        result,
        Err(PackError::IntOutOfRange {
            index: 0,
            value: 256
        })
    );
}

#[test]
fn test_pack_negative_int() {
    let result = pack_bytes(&[RegistryElement::Int(7), RegistryElement::Int(-1)]);

    assert_eq!(
        result,
        Err(PackError::IntOutOfRange {
            index: 1,
            value: -1
        })
    );
}

#[test]
fn test_pack_char_above_latin1() {
    let result = pack_bytes(&[RegistryElement::Char('\u{100}')]);

    assert_eq!(
        result,
        Err(PackError::CharOutOfRange {
            index: 0,
            value: '\u{100}'
        })
    );
}

#[test]
fn test_pack_latin1_char_boundary() {
    assert_eq!(
        pack_bytes(&[RegistryElement::Char('\u{ff}')]).expect("Failed to pack_bytes(..)"),
        vec![0xFF]
    );
}

#[test]
fn test_pack_skips_unsupported() {
    let elements = [
        RegistryElement::Unsupported,
        RegistryElement::Int(9),
        RegistryElement::Unsupported,
        RegistryElement::Char('z'),
    ];

    assert_eq!(
        pack_bytes(&elements).expect("Failed to pack_bytes(..)"),
        vec![9, b'z']
    );
}

#[test]
fn test_pack_error_reports_first_offender() {
    let elements = [
        RegistryElement::Unsupported,
        RegistryElement::Char('Ā'),
        RegistryElement::Int(1000),
    ];

    assert!(matches!(
        pack_bytes(&elements),
        Err(PackError::CharOutOfRange { index: 1, .. })
    ));
}

#[test]
fn test_element_conversions() {
    assert_eq!(RegistryElement::from(5u8), RegistryElement::Int(5));
    assert_eq!(RegistryElement::from(-3i64), RegistryElement::Int(-3));
    assert_eq!(RegistryElement::from('q'), RegistryElement::Char('q'));
    assert!(RegistryElement::Int(0).is_supported());
    assert!(!RegistryElement::Unsupported.is_supported());
}

#[test]
fn test_pack_error_display() {
    let err = PackError::IntOutOfRange {
        index: 2,
        value: 300,
    };
    assert_eq!(
        err.to_string(),
        "integer 300 at index 2 does not fit in a single byte"
    );
}
