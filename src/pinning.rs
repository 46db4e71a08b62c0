// Copyright 2024-2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pinning of the measuring thread to a single CPU, to reduce scheduler noise
//! in the timings.

use crate::macros::log_warn;
#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
use {
    crate::macros::log_debug,
    nix::{
        sched::{sched_getaffinity, sched_setaffinity, CpuSet},
        unistd::Pid,
    },
};

/// Policy to pin the measuring thread to a CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuPinningPolicy {
    /// Don't pin the thread.
    No,
    /// Pin the thread to a CPU, if CPU pinning is supported and implemented on
    /// this platform. Failures are logged and otherwise ignored.
    IfSupported,
    /// Pin the thread to a CPU. If CPU pinning isn't supported on this platform
    /// (or not implemented), or fails, this panics.
    Always,
}

/// Pins the calling thread to the first CPU it is currently allowed to run on,
/// according to the given policy.
///
/// Returns the index of the CPU that the thread was pinned to, if any.
pub fn pin_current_thread(policy: CpuPinningPolicy) -> Option<usize> {
    match policy {
        CpuPinningPolicy::No => None,
        CpuPinningPolicy::IfSupported => match try_pin_current_thread() {
            Ok(cpu) => Some(cpu),
            Err(_e) => {
                log_warn!("Failed to pin the measuring thread: {_e}");
                None
            }
        },
        CpuPinningPolicy::Always => match try_pin_current_thread() {
            Ok(cpu) => Some(cpu),
            Err(e) => panic!("Failed to pin the measuring thread: {e}"),
        },
    }
}

#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
fn try_pin_current_thread() -> Result<usize, String> {
    let allowed = sched_getaffinity(Pid::from_raw(0))
        .map_err(|e| format!("cannot read the CPU affinity: {e}"))?;
    let cpu = (0..CpuSet::count())
        .find(|&cpu| allowed.is_set(cpu).unwrap_or(false))
        .ok_or_else(|| "no CPU is available to this thread".to_owned())?;

    let mut cpu_set = CpuSet::new();
    cpu_set
        .set(cpu)
        .map_err(|e| format!("cannot select CPU #{cpu}: {e}"))?;
    sched_setaffinity(Pid::from_raw(0), &cpu_set)
        .map_err(|e| format!("cannot set the CPU affinity to CPU #{cpu}: {e}"))?;

    log_debug!("Pinned the measuring thread to CPU #{cpu}");
    Ok(cpu)
}

#[cfg(any(
    miri,
    not(any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    ))
))]
fn try_pin_current_thread() -> Result<usize, String> {
    Err("Pinning threads to CPUs is not implemented on this platform.".to_owned())
}
