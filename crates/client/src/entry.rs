// SPDX-License-Identifier: MIT

//! Implementation functions behind the entry-point macros.
//!
//! Hidden from docs; the macros are the public surface. Each function routes
//! through the global session and terminates the process on transport
//! failure.

use std::fmt;

use crate::global;
use crate::render::DumpOptions;
use crate::session::CallSite;
use crate::TransportError;

fn or_die(result: Result<(), TransportError>) {
    if let Err(err) = result {
        global::fatal(err);
    }
}

#[doc(hidden)]
pub fn __rd<T: fmt::Debug>(
    value: T,
    label: Option<String>,
    opts: DumpOptions,
    site: CallSite,
) -> T {
    match global::with(|s| s.dump(&value, label.as_deref(), opts, site)) {
        Ok(()) => value,
        Err(err) => global::fatal(err),
    }
}

#[doc(hidden)]
pub fn __rdm(name: &str, values: &[&dyn fmt::Debug]) {
    or_die(global::with(|s| s.dump_multi(name, values)));
}

#[doc(hidden)]
pub fn __rda(entries: &[(&str, &dyn fmt::Debug)]) {
    or_die(global::with(|s| s.dump_all(entries)));
}

#[doc(hidden)]
pub fn __rf(name: &str) {
    or_die(global::with(|s| s.dump_fn(name)));
}

#[doc(hidden)]
pub fn __rl(label: impl AsRef<str>) {
    or_die(global::with(|s| s.label_line(label.as_ref())));
}

#[doc(hidden)]
pub fn __t(label: Option<&str>) {
    or_die(global::with(|s| s.timer(label).map(|_| ())));
}
