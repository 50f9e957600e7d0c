// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Companion macros for the [`Emitter`](crate::Emitter) methods.
//!
//! The macros exist so call sites keep printf-style ergonomics while the
//! format strings stay compile-time checked: each one forwards to a method
//! taking `fmt::Arguments` or a slice of `Display` operands.

/// Emits a space-joined line: [`Emitter::println_parts`](crate::Emitter::println_parts).
///
/// ```
/// # use verbose::{Category, Emitter, emitln};
/// # let em = Emitter::new(true, false);
/// emitln!(em, Category::Info, "loaded", 3, "profiles");
/// ```
#[macro_export]
macro_rules! emitln {
    ($em:expr, $cat:expr $(, $part:expr)* $(,)?) => {
        $em.println_parts($cat, &[$(&$part as &dyn ::std::fmt::Display),*])
    };
}

/// Emits concatenated operands without a newline: [`Emitter::print_parts`](crate::Emitter::print_parts).
#[macro_export]
macro_rules! emit {
    ($em:expr, $cat:expr $(, $part:expr)* $(,)?) => {
        $em.print_parts($cat, &[$(&$part as &dyn ::std::fmt::Display),*])
    };
}

/// Emits a printf-style message: [`Emitter::printf`](crate::Emitter::printf).
///
/// ```
/// # use verbose::{Category, Emitter, emitf};
/// # let em = Emitter::new(true, false);
/// emitf!(em, Category::Warning, "value should be greater than {}\n", 10);
/// ```
#[macro_export]
macro_rules! emitf {
    ($em:expr, $cat:expr, $($fmt:tt)+) => {
        $em.printf($cat, ::std::format_args!($($fmt)+))
    };
}

/// As [`emitf!`], gated on an extra condition: [`Emitter::printf_if`](crate::Emitter::printf_if).
#[macro_export]
macro_rules! emitf_if {
    ($em:expr, $cond:expr, $cat:expr, $($fmt:tt)+) => {
        $em.printf_if($cond, $cat, ::std::format_args!($($fmt)+))
    };
}

/// Emits a debug line when debug mode is on: [`Emitter::debug`](crate::Emitter::debug).
#[macro_export]
macro_rules! debugln {
    ($em:expr, $($fmt:tt)+) => {
        $em.debug(::std::format_args!($($fmt)+))
    };
}

/// Emits a track line with the elapsed time since `start`: [`Emitter::track`](crate::Emitter::track).
///
/// ```
/// # use verbose::{Emitter, track};
/// # let em = Emitter::new(true, false);
/// let start = std::time::Instant::now();
/// // ... work ...
/// track!(em, start, "scanned {} files", 42);
/// ```
#[macro_export]
macro_rules! track {
    ($em:expr, $start:expr, $($fmt:tt)+) => {
        $em.track($start, ::std::format_args!($($fmt)+))
    };
}

/// Panics with an alert-prefixed message when the condition is false,
/// regardless of verbosity flags: [`assert_fmt`](crate::assert_fmt).
///
/// ```should_panic
/// # use verbose::vassert;
/// vassert!(1 + 1 == 3, "arithmetic broke: {}", 1 + 1);
/// ```
#[macro_export]
macro_rules! vassert {
    ($ok:expr, $($fmt:tt)+) => {
        $crate::assert_fmt($ok, ::std::format_args!($($fmt)+))
    };
}
