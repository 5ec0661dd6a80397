// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for OSC 9;4 sequence construction and writing.

use std::io;

use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Validation errors are raised before any output is produced. Write errors
/// come from the caller's sink and are surfaced verbatim, never retried.
#[derive(Error, Debug)]
pub enum Osc94Error {
    /// Percent was outside `0..=100` for a state that requires a bounded
    /// percentage.
    #[error("progress percent {0} is out of range 0..=100")]
    PercentOutOfRange(u8),

    /// An integer wire code did not map to any [`crate::ProgressState`].
    #[error("unknown OSC 9;4 state code {0}")]
    UnknownStateCode(u8),

    /// The underlying sink failed to accept the encoded sequence.
    #[error(transparent)]
    Write(#[from] io::Error),
}
