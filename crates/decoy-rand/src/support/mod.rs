// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Deterministic sources for tests (`test-utils` feature).
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
