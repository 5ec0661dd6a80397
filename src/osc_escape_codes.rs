// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC 9;4 sequence construction.
//!
//! More info:
//! - <https://learn.microsoft.com/en-us/windows/terminal/tutorials/progress-bar-sequences>
//! - <https://conemu.github.io/en/AnsiEscapeCodes.html#ConEmu_specific_OSC>

use std::fmt::{self, Display, Formatter};

use strum_macros::{EnumCount, FromRepr};

use crate::Osc94Error;

/// Maximum accepted progress percentage.
pub const MAX_PERCENT: u8 = 100;

/// OSC 9;4 sequence constants wrapped in a dedicated module for clarity.
mod osc_codes {
    /// OSC 9;4 sequence prefix: ESC ] 9 ; 4 ;
    pub const START: &str = "\x1b]9;4;";
    /// BEL terminator (0x07).
    pub const BEL: &str = "\x07";
    /// String Terminator: ESC \
    pub const ST: &str = "\x1b\\";
}

/// The OSC 9;4 progress state, with the wire code each variant maps to.
///
/// These are the terminal-defined values used by Windows Terminal and other
/// compatible emulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, FromRepr)]
#[repr(u8)]
pub enum ProgressState {
    /// Remove the progress indicator.
    Clear = 0,
    /// Normal progress, 0-100%.
    Normal = 1,
    /// The task failed; percent keeps the last meaningful value.
    Error = 2,
    /// The task is running with no known percentage. The emitted percent
    /// field is always `0`.
    Indeterminate = 3,
    /// The task is paused or degraded, 0-100%.
    Warning = 4,
}

/// These trait implementations allow us to use `ProgressState` and `u8`
/// interchangeably.
mod convert_between_state_and_u8 {
    impl TryFrom<u8> for super::ProgressState {
        type Error = crate::Osc94Error;

        fn try_from(value: u8) -> Result<Self, <Self as TryFrom<u8>>::Error> {
            Self::from_repr(value).ok_or(crate::Osc94Error::UnknownStateCode(value))
        }
    }

    impl From<super::ProgressState> for u8 {
        fn from(value: super::ProgressState) -> Self { value as u8 }
    }
}

/// The byte sequence that ends an emitted OSC 9;4 sequence.
///
/// Terminals accept either form; BEL is the default used by [`escape`] and
/// [`crate::ProgressWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A single BEL control byte (0x07).
    Bel,
    /// String Terminator: the two bytes ESC `\`.
    St,
}

mod terminator_impl {
    use super::*;

    impl Display for Terminator {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                Terminator::Bel => write!(f, "{}", osc_codes::BEL),
                Terminator::St  => write!(f, "{}", osc_codes::ST),
            }
        }
    }
}

pub mod sizing {
    use smallstr::SmallString;

    /// The longest sequence is `ESC ] 9 ; 4 ; <code> ; 100 ESC \` at 13
    /// bytes, so encoded sequences never spill to the heap.
    pub const MAX_OSC_SEQ_SIZE: usize = 16;
    pub type SeqString = SmallString<[u8; MAX_OSC_SEQ_SIZE]>;
}

/// Returns an OSC 9;4 sequence terminated with BEL.
///
/// This is the stateless entry point for callers who manage output
/// themselves; [`crate::ProgressWriter`] pairs it with a sink and an
/// enable/disable policy.
///
/// # Errors
///
/// Returns [`Osc94Error::PercentOutOfRange`] when `percent` is greater than
/// [`MAX_PERCENT`] and `state` is not [`ProgressState::Indeterminate`].
pub fn escape(
    state: ProgressState,
    percent: u8,
) -> Result<sizing::SeqString, Osc94Error> {
    escape_with_terminator(state, percent, Terminator::Bel)
}

/// Returns an OSC 9;4 sequence ended by the given terminator.
///
/// `percent` must be `0..=100` unless `state` is
/// [`ProgressState::Indeterminate`], which accepts any value and always emits
/// `0` in the payload.
///
/// # Errors
///
/// Returns [`Osc94Error::PercentOutOfRange`] when `percent` is greater than
/// [`MAX_PERCENT`] and `state` is not [`ProgressState::Indeterminate`].
pub fn escape_with_terminator(
    state: ProgressState,
    percent: u8,
    terminator: Terminator,
) -> Result<sizing::SeqString, Osc94Error> {
    if state != ProgressState::Indeterminate && percent > MAX_PERCENT {
        return Err(Osc94Error::PercentOutOfRange(percent));
    }

    let percent = match state {
        ProgressState::Indeterminate => 0,
        _ => percent,
    };

    Ok(format!(
        "{}{};{}{}",
        osc_codes::START,
        u8::from(state),
        percent,
        terminator
    )
    .into())
}
