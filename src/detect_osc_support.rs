// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Best-effort detection of OSC 9;4 progress support.
//!
//! The check is conservative: it requires an interactive sink, excludes
//! `TERM=dumb`, and then looks for environment hints left by terminals known
//! to render OSC 9;4. Two overrides short-circuit everything else:
//! `OSC94_DISABLE=1` always disables output and `OSC94_FORCE=1` always
//! enables it, with disable winning when both are set.
//!
//! The environment is re-read on every call: nothing here runs per render
//! frame, and callers may mutate the environment between calls, so there is
//! no memoization.

use std::{env, io::IsTerminal};

/// Reports whether OSC 9;4 progress sequences are likely to render for this
/// sink.
///
/// Detection is total: it never fails, it degrades to `false`.
#[must_use]
pub fn detect<W: IsTerminal>(sink: &W) -> bool {
    let supported = examine_env_vars_to_determine_osc_support(sink, helpers::is_a_tty);
    tracing::debug!(supported, "OSC 9;4 progress support detection");
    supported
}

/// Determine whether OSC 9;4 is supported heuristically, with an injectable
/// interactivity check.
///
/// [`detect`] supplies [`std::io::IsTerminal`] as the `tty_check`. Pass a
/// custom check for sinks that are not OS-backed streams (those are never
/// interactive) or to substitute the answer in tests.
///
/// The checks short-circuit in this exact order:
/// 1. `OSC94_DISABLE=1` → `false`, overriding every other signal.
/// 2. `OSC94_FORCE=1` → `true`.
/// 3. `tty_check(sink)` reports `false` → `false`.
/// 4. `TERM` indicates a dumb terminal → `false`.
/// 5. Otherwise `true` iff a known compatibility hint is present.
#[must_use]
pub fn examine_env_vars_to_determine_osc_support<W>(
    sink: &W,
    tty_check: impl Fn(&W) -> bool,
) -> bool {
    if env::var("OSC94_DISABLE").is_ok_and(|value| value == "1") {
        return false;
    }

    if env::var("OSC94_FORCE").is_ok_and(|value| value == "1") {
        return true;
    }

    if !tty_check(sink) {
        return false;
    }

    if helpers::is_dumb_term() {
        return false;
    }

    helpers::has_osc94_support_hint()
}

mod helpers {
    use super::{IsTerminal, env};

    /// Terminal programs known to render OSC 9;4, matched case-insensitively
    /// against `TERM_PROGRAM`.
    pub const SUPPORTED_TERM_PROGRAMS: [&str; 4] =
        ["ghostty", "iTerm.app", "vscode", "vscode-insiders"];

    #[must_use]
    pub fn is_a_tty<W: IsTerminal>(sink: &W) -> bool {
        sink.is_terminal()
    }

    /// Reports whether `TERM` indicates a basic terminal.
    #[must_use]
    pub fn is_dumb_term() -> bool {
        env::var("TERM").is_ok_and(|term| term.trim().eq_ignore_ascii_case("dumb"))
    }

    /// Checks environment hints for OSC 9;4 support.
    #[must_use]
    pub fn has_osc94_support_hint() -> bool {
        if env::var("WT_SESSION").is_ok_and(|value| !value.is_empty()) {
            return true;
        }

        if env::var("ConEmuANSI").is_ok_and(|value| value.eq_ignore_ascii_case("ON")) {
            return true;
        }

        if env::var("VTE_VERSION").is_ok_and(|value| !value.is_empty()) {
            return true;
        }

        env::var("TERM_PROGRAM").is_ok_and(|program| {
            SUPPORTED_TERM_PROGRAMS
                .iter()
                .any(|candidate| program.eq_ignore_ascii_case(candidate))
        })
    }
}
