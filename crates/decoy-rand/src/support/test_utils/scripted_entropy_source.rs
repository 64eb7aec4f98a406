// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Replays a fixed byte script, front to back.
///
/// Each request consumes bytes from the script. A request larger than what
/// is left fails with [`EntropyError::Exhausted`] and consumes nothing, so an
/// empty script models a source that is down.
///
/// ```
/// use decoy_rand::EntropySource;
/// use decoy_rand::test_utils::ScriptedEntropySource;
///
/// let entropy = ScriptedEntropySource::new([0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(entropy.fill_array::<2>().unwrap(), [0xde, 0xad]);
/// assert_eq!(entropy.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedEntropySource {
    script: Vec<u8>,
    cursor: Cell<usize>,
}

impl ScriptedEntropySource {
    /// Source that hands out `script` and then runs dry.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            cursor: Cell::new(0),
        }
    }

    /// Source with nothing left to give.
    pub fn exhausted() -> Self {
        Self::new(Vec::new())
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor.get()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let start = self.cursor.get();
        let remaining = self.script.len() - start;

        if dest.len() > remaining {
            return Err(EntropyError::Exhausted {
                requested: dest.len(),
                remaining,
            });
        }

        dest.copy_from_slice(&self.script[start..start + dest.len()]);
        self.cursor.set(start + dest.len());

        Ok(())
    }
}
