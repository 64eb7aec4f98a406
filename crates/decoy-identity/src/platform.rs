// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host architecture checks.
//!
//! The machine name is asked from the OS at runtime, so a 32-bit build on a
//! 64-bit host still reports the host:
//!
//! - Unix: `uname(2)` `machine` field
//! - Windows: `PROCESSOR_ARCHITEW6432`, then `PROCESSOR_ARCHITECTURE`
//!
//! The compile-time target architecture is used only when that lookup fails.

use log::debug;

/// Returns `true` if the machine architecture name ends in `64`.
///
/// Matches `x86_64`, `aarch64`, `AMD64`, `ARM64` and the like.
#[inline]
pub fn machine_is_64bit(arch: &str) -> bool {
    arch.ends_with("64")
}

/// Machine hardware name reported by the running OS, if available.
#[cfg(unix)]
pub fn machine_name() -> Option<String> {
    // SAFETY: `utsname` is plain C data; all-zero is a valid value.
    let mut uts: libc::utsname = unsafe { core::mem::zeroed() };

    // SAFETY: `uts` is a valid, writable `utsname`.
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }

    // SAFETY: on success `machine` holds a NUL-terminated string.
    let machine = unsafe { core::ffi::CStr::from_ptr(uts.machine.as_ptr()) };

    machine
        .to_str()
        .ok()
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

/// Machine hardware name reported by the running OS, if available.
#[cfg(windows)]
pub fn machine_name() -> Option<String> {
    // Set only for 32-bit processes running under WOW64.
    std::env::var("PROCESSOR_ARCHITEW6432")
        .or_else(|_| std::env::var("PROCESSOR_ARCHITECTURE"))
        .ok()
        .filter(|m| !m.is_empty())
}

/// Machine hardware name reported by the running OS, if available.
#[cfg(not(any(unix, windows)))]
pub fn machine_name() -> Option<String> {
    None
}

pub(crate) fn is_x64_os_with(machine_fn: &dyn Fn() -> Option<String>) -> bool {
    match machine_fn() {
        Some(machine) => machine_is_64bit(&machine),
        None => {
            debug!(
                "OS machine name unavailable, falling back to target arch {}",
                std::env::consts::ARCH
            );
            machine_is_64bit(std::env::consts::ARCH)
        }
    }
}

/// Returns `true` if the operating system runs on a 64-bit machine.
#[inline]
pub fn is_x64_os() -> bool {
    is_x64_os_with(&machine_name)
}
