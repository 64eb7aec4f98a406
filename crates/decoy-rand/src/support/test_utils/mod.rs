// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy sources with known output.

mod scripted_entropy_source;

pub use scripted_entropy_source::ScriptedEntropySource;
