// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_osc94
//!
//! Rust crate to emit OSC 9;4 progress sequences, which let a CLI app report
//! task progress to the taskbar or tab indicator of a supporting terminal
//! emulator (Windows Terminal, ConEmu, VTE-based terminals, Ghostty, iTerm2,
//! VS Code).
//!
//! More info:
//! - <https://learn.microsoft.com/en-us/windows/terminal/tutorials/progress-bar-sequences>
//! - <https://conemu.github.io/en/AnsiEscapeCodes.html#ConEmu_specific_OSC>
//!
//! # Usage
//!
//! The main struct is [`ProgressWriter`]. Bind it to an output stream, let
//! [`detect`] decide whether the terminal will render the sequences, and
//! drive the indicator with the state methods:
//!
//! ```rust
//! use r3bl_osc94::ProgressWriter;
//!
//! fn main() -> Result<(), r3bl_osc94::Osc94Error> {
//!     let mut progress = ProgressWriter::new(std::io::stdout()).auto_enable();
//!
//!     progress.set_percent(42)?;
//!     progress.indeterminate()?;
//!     progress.clear()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The sequence encoder is also exposed on its own for callers who manage
//! output themselves:
//!
//! ```rust
//! use r3bl_osc94::{ProgressState, escape};
//!
//! let seq = escape(ProgressState::Normal, 42)?;
//! assert_eq!(seq.as_str(), "\x1b]9;4;1;42\x07");
//! # Ok::<(), r3bl_osc94::Osc94Error>(())
//! ```
//!
//! # Environment variables
//!
//! [`detect`] re-reads the environment on every call:
//!
//! | Variable | Effect |
//! |---|---|
//! | `OSC94_DISABLE=1` | force detection to `false`, wins over every other signal |
//! | `OSC94_FORCE=1` | force detection to `true` (unless disabled) |
//! | `TERM` | `dumb` forces `false` |
//! | `WT_SESSION` | any non-empty value is a compatibility hint |
//! | `ConEmuANSI` | `ON` is a compatibility hint |
//! | `VTE_VERSION` | any non-empty value is a compatibility hint |
//! | `TERM_PROGRAM` | `ghostty` / `iTerm.app` / `vscode` / `vscode-insiders` are compatibility hints |

// Attach the following files to the library module.
pub mod detect_osc_support;
pub mod error;
pub mod osc_escape_codes;
pub mod progress_writer;

// Re-export.
pub use detect_osc_support::*;
pub use error::*;
pub use osc_escape_codes::*;
pub use progress_writer::*;
