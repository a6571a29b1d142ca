// SPDX-License-Identifier: MIT

//! End-of-process summary hook.
//!
//! Registered once, after the global session first connects. Uses `atexit`
//! rather than a Rust destructor because the global session is a static and
//! statics are never dropped.

#[cfg(unix)]
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static REGISTER: Once = Once::new();
#[cfg(unix)]
static RAN: AtomicBool = AtomicBool::new(false);

/// Register the at-exit summary hook. Safe to call repeatedly.
#[cfg(unix)]
pub(crate) fn register() {
    REGISTER.call_once(|| {
        // No safe wrapper exists for atexit.
        #[allow(unsafe_code)]
        let rc = unsafe { libc::atexit(send_summary) };
        if rc != 0 {
            tracing::debug!("could not register exit summary hook");
        }
    });
}

#[cfg(not(unix))]
pub(crate) fn register() {
    REGISTER.call_once(|| {});
}

/// Must not unwind (called through the C runtime) and must run at most once.
#[cfg(unix)]
extern "C" fn send_summary() {
    if RAN.swap(true, Ordering::SeqCst) {
        return;
    }
    crate::global::try_summary();
}

/// Peak resident set size of this process, if the platform exposes it.
#[cfg(unix)]
pub(crate) fn peak_rss_bytes() -> Option<u64> {
    #[allow(unsafe_code)]
    let usage = unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) != 0 {
            return None;
        }
        usage
    };
    let maxrss = u64::try_from(usage.ru_maxrss).ok()?;
    // ru_maxrss is in kilobytes on Linux, bytes on macOS.
    #[cfg(target_os = "macos")]
    return Some(maxrss);
    #[cfg(not(target_os = "macos"))]
    Some(maxrss * 1024)
}

#[cfg(not(unix))]
pub(crate) fn peak_rss_bytes() -> Option<u64> {
    None
}
