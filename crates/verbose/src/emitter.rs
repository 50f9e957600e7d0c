// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional emission of colored diagnostic lines to stdout.
//!
//! All writes are fire-and-forget single calls to stdout; write failures are
//! not checked and nothing is buffered across calls.

use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::category::Category;

/// Process-scoped verbosity context. Construct once near startup, share by
/// reference, and toggle the flags at any time.
///
/// Flag access uses relaxed ordering: a stale read only affects whether a
/// diagnostic line appears, never program logic.
#[derive(Debug, Default)]
pub struct Emitter {
    verbose: AtomicBool,
    debug: AtomicBool,
}

impl Emitter {
    pub const fn new(verbose: bool, debug: bool) -> Self {
        Self {
            verbose: AtomicBool::new(verbose),
            debug: AtomicBool::new(debug),
        }
    }

    pub fn set_verbose(&self, on: bool) {
        self.verbose.store(on, Ordering::Relaxed);
    }

    pub fn set_debug(&self, on: bool) {
        self.debug.store(on, Ordering::Relaxed);
    }

    pub fn verbose_enabled(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Emit iff verbose mode is on, or the message is `Debug` and debug mode
    /// is on. Debug messages surface without general verbosity this way.
    fn gate(&self, category: Category) -> bool {
        self.verbose_enabled() || (category == Category::Debug && self.debug_enabled())
    }

    /// Writes the prefix and `parts` joined by single spaces, with a trailing
    /// newline. `Track` inserts a timestamp operand after the prefix.
    ///
    /// Usually invoked through [`emitln!`](crate::emitln).
    pub fn println_parts(&self, category: Category, parts: &[&dyn fmt::Display]) {
        if self.gate(category) {
            print!("{}", render_joined(category, stamp(category).as_deref(), parts));
        }
    }

    /// Writes the prefix followed by `parts` concatenated as-is: no
    /// separators, no trailing newline. `Track` still gets its timestamp
    /// operand after the prefix.
    ///
    /// Usually invoked through [`emit!`](crate::emit).
    pub fn print_parts(&self, category: Category, parts: &[&dyn fmt::Display]) {
        if self.gate(category) {
            print!("{}", render_concat(category, stamp(category).as_deref(), parts));
        }
    }

    /// Writes the prefix, a space, and the rendered format arguments. No
    /// trailing newline is added. `Track` splices a timestamp between the
    /// prefix and the message.
    ///
    /// Usually invoked through [`emitf!`](crate::emitf).
    pub fn printf(&self, category: Category, args: fmt::Arguments<'_>) {
        if self.gate(category) {
            print!("{}", render_formatted(category, stamp(category).as_deref(), args));
        }
    }

    /// As [`printf`](Emitter::printf), but `condition` short-circuits before
    /// the gate: when false, nothing is evaluated or emitted.
    ///
    /// Usually invoked through [`emitf_if!`](crate::emitf_if).
    pub fn printf_if(&self, condition: bool, category: Category, args: fmt::Arguments<'_>) {
        if condition {
            self.printf(category, args);
        }
    }

    /// Logs an `Err` as an alert line and passes the result through
    /// unchanged, so it can wrap expressions at `?` sites:
    ///
    /// ```no_run
    /// # use verbose::Emitter;
    /// # fn run(em: &Emitter) -> std::io::Result<()> {
    /// let text = em.report("read config", std::fs::read_to_string("app.toml"))?;
    /// # Ok(()) }
    /// ```
    ///
    /// `Ok` values pass through silently. The error is only logged when
    /// verbose mode is on, and is never consumed.
    pub fn report<T, E: fmt::Display>(&self, context: &str, result: Result<T, E>) -> Result<T, E> {
        if self.verbose_enabled() {
            if let Err(err) = &result {
                print!("{}", render_report(context, err));
            }
        }
        result
    }

    /// Writes a debug line iff debug mode is on, independent of the verbose
    /// flag.
    ///
    /// Usually invoked through [`debugln!`](crate::debugln).
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if self.debug_enabled() {
            print!("{}", render_debug(args));
        }
    }

    /// Writes a track line reporting the time elapsed since `start`, iff
    /// verbose mode is on. The message is followed by ` << ` and the elapsed
    /// duration (`1.503ms`, `2.1s`, ...).
    ///
    /// Usually invoked through [`track!`](crate::track).
    pub fn track(&self, start: Instant, args: fmt::Arguments<'_>) {
        if self.verbose_enabled() {
            print!("{}", render_track(args, start.elapsed()));
        }
    }
}

/// Panics with an alert-prefixed message when `ok` is false.
///
/// Ignores both verbosity flags: this guards invariants and is not a
/// diagnostic. Usually invoked through [`vassert!`](crate::vassert).
#[track_caller]
#[allow(clippy::panic)]
pub fn assert_fmt(ok: bool, args: fmt::Arguments<'_>) {
    if !ok {
        panic!("{} {}", Category::Alert.prefix(), args);
    }
}

/// Wall-clock timestamp operand for stamped categories, `None` otherwise.
fn stamp(category: Category) -> Option<String> {
    category
        .stamped()
        .then(|| chrono::Local::now().format("%Y%m%d %H:%M:%S").to_string())
}

fn render_joined(category: Category, stamp: Option<&str>, parts: &[&dyn fmt::Display]) -> String {
    let mut line = String::from(category.prefix());
    if let Some(ts) = stamp {
        let _ = write!(line, " {ts}");
    }
    for part in parts {
        let _ = write!(line, " {part}");
    }
    line.push('\n');
    line
}

fn render_concat(category: Category, stamp: Option<&str>, parts: &[&dyn fmt::Display]) -> String {
    let mut line = String::from(category.prefix());
    if let Some(ts) = stamp {
        let _ = write!(line, " {ts}");
    }
    for part in parts {
        let _ = write!(line, "{part}");
    }
    line
}

fn render_formatted(category: Category, stamp: Option<&str>, args: fmt::Arguments<'_>) -> String {
    match stamp {
        Some(ts) => format!("{} {} {}", category.prefix(), ts, args),
        None => format!("{} {}", category.prefix(), args),
    }
}

fn render_debug(args: fmt::Arguments<'_>) -> String {
    format!("{} {}\n", Category::Debug.prefix(), args)
}

fn render_report(context: &str, err: &dyn fmt::Display) -> String {
    format!("{} [{}] {}\n", Category::Alert.prefix(), context, err)
}

fn render_track(args: fmt::Arguments<'_>, elapsed: Duration) -> String {
    format!("{} {} << {:?}\n", Category::Track.prefix(), args, elapsed)
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
