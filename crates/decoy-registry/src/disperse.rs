// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::element::RegistryElement;

/// One slot of a dispersed string: either a source character or the zero
/// marker that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispersed {
    /// Character copied from the input.
    Char(char),
    /// Zero marker.
    Zero,
}

impl Dispersed {
    /// Converts the slot into a packable element. The zero marker becomes `Int(0)`.
    #[inline]
    pub fn to_registry_element(self) -> RegistryElement {
        match self {
            Self::Char(c) => RegistryElement::Char(c),
            Self::Zero => RegistryElement::Int(0),
        }
    }
}

impl From<Dispersed> for RegistryElement {
    fn from(value: Dispersed) -> Self {
        value.to_registry_element()
    }
}

/// Interleaves every character of `chars` with a [`Dispersed::Zero`] marker.
///
/// The output always holds exactly twice as many slots as the input has
/// characters: position `2i` is the `i`-th character and `2i + 1` is zero.
pub fn disperse_chars<I>(chars: I) -> Vec<Dispersed>
where
    I: IntoIterator<Item = char>,
{
    let chars = chars.into_iter();
    let mut dispersed = Vec::with_capacity(chars.size_hint().0 * 2);

    for c in chars {
        dispersed.push(Dispersed::Char(c));
        dispersed.push(Dispersed::Zero);
    }

    dispersed
}

/// Disperses a string, e.g. `"123"` becomes `['1', 0, '2', 0, '3', 0]`.
///
/// # Example
///
/// ```
/// use decoy_registry::{Dispersed, disperse_string};
///
/// assert_eq!(
///     disperse_string("12"),
///     vec![Dispersed::Char('1'), Dispersed::Zero, Dispersed::Char('2'), Dispersed::Zero]
/// );
/// assert!(disperse_string("").is_empty());
/// ```
#[inline]
pub fn disperse_string(input: &str) -> Vec<Dispersed> {
    disperse_chars(input.chars())
}

/// Disperses a string straight into [`RegistryElement`]s ready for
/// [`pack_bytes`](crate::pack_bytes).
pub fn disperse_to_elements(input: &str) -> Vec<RegistryElement> {
    disperse_string(input)
        .into_iter()
        .map(Dispersed::to_registry_element)
        .collect()
}
