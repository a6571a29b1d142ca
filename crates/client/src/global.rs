// SPDX-License-Identifier: MIT

//! The process-wide session backing the entry-point macros.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::exit_hook;
use crate::session::DumpSession;

static SESSION: OnceLock<Mutex<DumpSession>> = OnceLock::new();

fn session() -> &'static Mutex<DumpSession> {
    SESSION.get_or_init(|| Mutex::new(DumpSession::new()))
}

/// Run `f` against the global session. The exit-summary hook is registered
/// after the first successful connect.
pub(crate) fn with<R>(
    f: impl FnOnce(&mut DumpSession) -> Result<R, TransportError>,
) -> Result<R, TransportError> {
    let mut guard = session().lock();
    let result = f(&mut guard);
    if result.is_ok() && guard.is_connected() {
        exit_hook::register();
    }
    result
}

/// Best-effort summary from the at-exit hook. `try_lock` because exit can
/// be reached while a dump on another thread still holds the session.
pub(crate) fn try_summary() {
    if let Some(lock) = SESSION.get() {
        if let Some(mut guard) = lock.try_lock() {
            let _ = guard.summary();
        }
    }
}

/// Abort the host process after a transport failure. The macros are a debug
/// aid with no error channel; an unreachable server ends the run.
pub(crate) fn fatal(err: TransportError) -> ! {
    eprintln!("peek: {err}");
    std::process::exit(1);
}
