// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the public macro surface.
//!
//! Output content is asserted at the rendering layer in the crate's unit
//! tests; these specs exercise the exported macros the way an embedding CLI
//! would call them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Instant;

use verbose::{Category, Emitter, debugln, emit, emitf, emitf_if, emitln, track, vassert};

#[test]
fn macros_accept_mixed_display_operands() {
    let em = Emitter::new(true, true);
    emitln!(em, Category::Info, "loaded", 3, "profiles");
    emitln!(em, Category::Track, "checkpoint");
    emit!(em, Category::Warning, "partial: ", 0.5);
    emitf!(em, Category::Alert, "exit code {}\n", 2);
    debugln!(em, "raw state: {:?}", [1, 2, 3]);
}

#[test]
fn macros_accept_trailing_commas() {
    let em = Emitter::new(true, false);
    emitln!(em, Category::Info, "done",);
    emitf!(em, Category::Info, "{} of {}", 1, 2,);
}

#[test]
fn silent_emitter_exercises_every_gate() {
    let em = Emitter::default();
    emitln!(em, Category::Info, "unseen");
    emit!(em, Category::Alert, "unseen");
    emitf!(em, Category::Track, "unseen {}", 1);
    emitf_if!(em, true, Category::Warning, "unseen");
    debugln!(em, "unseen");
    track!(em, Instant::now(), "unseen");
}

#[test]
fn emitf_if_false_condition_emits_nothing_even_when_verbose() {
    let em = Emitter::new(true, true);
    emitf_if!(em, false, Category::Info, "unseen {}", 1);
}

#[test]
fn report_chains_through_question_mark() {
    let em = Emitter::new(true, false);
    let run = |em: &Emitter| -> Result<i32, String> {
        let value = em.report("parse", Ok::<i32, String>(21))?;
        Ok(value * 2)
    };
    assert_eq!(run(&em), Ok(42));

    let fail = |em: &Emitter| -> Result<i32, String> {
        let value: i32 = em.report("parse", Err("bad digit".to_string()))?;
        Ok(value)
    };
    assert_eq!(fail(&em), Err("bad digit".to_string()));
}

#[test]
fn vassert_holds_on_true_condition() {
    vassert!(2 + 2 == 4, "arithmetic broke: {}", 2 + 2);
}

#[test]
#[should_panic(expected = "wanted 3 got 4")]
fn vassert_fires_regardless_of_flags() {
    // No emitter involved at all: assertions ignore verbosity.
    vassert!(false, "wanted {} got {}", 3, 4);
}

#[test]
fn emitter_shared_across_threads() {
    let em = std::sync::Arc::new(Emitter::new(false, false));
    let handle = {
        let em = em.clone();
        std::thread::spawn(move || {
            em.set_verbose(true);
            emitln!(em, Category::Info, "from worker");
        })
    };
    handle.join().unwrap();
    assert!(em.verbose_enabled());
}
