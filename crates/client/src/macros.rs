// SPDX-License-Identifier: MIT

//! Entry-point macros: `rd!`, `rdm!`, `rda!`, `rf!`, `rl!`, `t!`.
//!
//! Macros rather than functions so the argument expression text and the
//! caller's file/line are captured. None of them touch host-program state;
//! `rd!` additionally evaluates to its argument so it can wrap any
//! expression in place.

/// Dump one value and pass it through.
///
/// ```ignore
/// let user = load_user(rd!(user_id));
/// rd!(response, 2);        // depth 2
/// rd!(response, 2, 0);     // depth 2, no trace lines
/// ```
#[macro_export]
macro_rules! rd {
    ($value:expr $(,)?) => {
        $crate::__rd(
            $value,
            $crate::callsite::label_for(stringify!($value)),
            $crate::DumpOptions::default(),
            $crate::CallSite { file: file!(), line: line!() },
        )
    };
    ($value:expr, $depth:expr $(,)?) => {
        $crate::__rd(
            $value,
            $crate::callsite::label_for(stringify!($value)),
            $crate::DumpOptions::default().with_depth($depth),
            $crate::CallSite { file: file!(), line: line!() },
        )
    };
    ($value:expr, $depth:expr, $trace:expr $(,)?) => {
        $crate::__rd(
            $value,
            $crate::callsite::label_for(stringify!($value)),
            $crate::DumpOptions::default().with_depth($depth).with_trace($trace),
            $crate::CallSite { file: file!(), line: line!() },
        )
    };
}

/// Dump several values on one line under a shared name.
#[macro_export]
macro_rules! rdm {
    ($name:expr $(, $value:expr)+ $(,)?) => {
        $crate::__rdm($name, &[$( &$value as &dyn ::std::fmt::Debug ),+])
    };
}

/// Dump named values on one line: `rda!("a" => x, "b" => y)`.
#[macro_export]
macro_rules! rda {
    ($( $key:expr => $value:expr ),+ $(,)?) => {
        $crate::__rda(&[$( ($key, &$value as &dyn ::std::fmt::Debug) ),+])
    };
}

/// Dump the current function's path.
#[macro_export]
macro_rules! rf {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::__rf(name_of(here).trim_end_matches("::here"))
    }};
}

/// Send a highlighted label banner.
#[macro_export]
macro_rules! rl {
    ($label:expr $(,)?) => {
        $crate::__rl($label)
    };
}

/// Mark or report the timer for a label (unlabeled default without one).
#[macro_export]
macro_rules! t {
    () => {
        $crate::__t(::std::option::Option::None)
    };
    ($label:expr $(,)?) => {
        $crate::__t(::std::option::Option::Some($label))
    };
}
