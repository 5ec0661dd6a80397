// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stateful OSC 9;4 progress writer.

use std::io::{IsTerminal, Write};

use crate::{Osc94Error, ProgressState, Terminator, detect, escape_with_terminator};

/// Writes OSC 9;4 sequences to an output sink.
///
/// The writer pairs the sequence encoder with a sink, an enabled flag, and a
/// terminator choice. It is created once per output stream, holds no other
/// resources, and never closes or flushes the sink. Pass `&mut` (or a handle
/// like [`std::io::stdout`]) to keep ownership of the underlying stream.
///
/// Construction defaults to enabled output with a BEL terminator. Chain
/// [`Self::enabled`], [`Self::auto_enable`], [`Self::enable_with`] and
/// [`Self::terminator`] to adjust; later calls override earlier ones.
///
/// ```rust
/// use r3bl_osc94::{ProgressWriter, Terminator};
///
/// let mut sink = Vec::new();
/// let mut progress = ProgressWriter::new(&mut sink).terminator(Terminator::St);
/// progress.set_percent(25)?;
///
/// assert_eq!(sink, b"\x1b]9;4;1;25\x1b\\");
/// # Ok::<(), r3bl_osc94::Osc94Error>(())
/// ```
pub struct ProgressWriter<W: Write> {
    sink: W,
    enabled: bool,
    terminator: Terminator,
}

impl<W: Write> ProgressWriter<W> {
    /// Returns a progress writer bound to the provided sink, with output
    /// enabled and sequences terminated by BEL.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            enabled: true,
            terminator: Terminator::Bel,
        }
    }

    /// Forces progress output on or off.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enables output only when [`detect`] reports support for the sink.
    #[must_use]
    pub fn auto_enable(mut self) -> Self
    where
        W: IsTerminal,
    {
        self.enabled = detect(&self.sink);
        self
    }

    /// Uses a custom detector to decide enablement.
    #[must_use]
    pub fn enable_with(mut self, detector: impl FnOnce(&W) -> bool) -> Self {
        self.enabled = detector(&self.sink);
        self
    }

    /// Selects the terminator used for every emitted sequence.
    #[must_use]
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Writes a progress update using the provided state and percentage.
    ///
    /// A disabled writer is a no-op that still returns `Ok`. Validation
    /// failures propagate before any byte is written; on success the encoded
    /// sequence reaches the sink in a single write call.
    ///
    /// # Errors
    ///
    /// Returns [`Osc94Error::PercentOutOfRange`] for a percent above 100 in a
    /// bounded state, or [`Osc94Error::Write`] when the sink rejects the
    /// bytes.
    pub fn set(
        &mut self,
        state: ProgressState,
        percent: u8,
    ) -> Result<(), Osc94Error> {
        if !self.enabled {
            return Ok(());
        }

        let sequence = escape_with_terminator(state, percent, self.terminator)?;
        self.sink.write_all(sequence.as_bytes())?;

        Ok(())
    }

    /// Updates progress using the normal state.
    pub fn set_percent(&mut self, percent: u8) -> Result<(), Osc94Error> {
        self.set(ProgressState::Normal, percent)
    }

    /// Switches to the indeterminate state.
    pub fn indeterminate(&mut self) -> Result<(), Osc94Error> {
        self.set(ProgressState::Indeterminate, 0)
    }

    /// Updates progress using the error state.
    pub fn error(&mut self, percent: u8) -> Result<(), Osc94Error> {
        self.set(ProgressState::Error, percent)
    }

    /// Updates progress using the warning state.
    pub fn warning(&mut self, percent: u8) -> Result<(), Osc94Error> {
        self.set(ProgressState::Warning, percent)
    }

    /// Hides any active progress indicator.
    pub fn clear(&mut self) -> Result<(), Osc94Error> {
        self.set(ProgressState::Clear, 0)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Sink that rejects every write.
    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn set_writes_sequence_with_st_terminator() {
        let mut buffer = Vec::new();
        let mut progress =
            ProgressWriter::new(&mut buffer).terminator(Terminator::St);

        progress.set(ProgressState::Normal, 25).unwrap();

        assert_eq!(buffer, b"\x1b]9;4;1;25\x1b\\");
    }

    #[test]
    fn disabled_writer_writes_nothing_and_succeeds() {
        let mut buffer = Vec::new();
        let mut progress = ProgressWriter::new(&mut buffer).enabled(false);

        progress.set(ProgressState::Normal, 10).unwrap();
        progress.indeterminate().unwrap();
        progress.clear().unwrap();

        assert!(buffer.is_empty());
    }

    #[test]
    fn later_construction_calls_override_earlier_ones() {
        let mut buffer = Vec::new();
        let mut progress = ProgressWriter::new(&mut buffer)
            .enabled(false)
            .terminator(Terminator::St)
            .enable_with(|_| true)
            .terminator(Terminator::Bel);

        progress.set_percent(5).unwrap();

        assert_eq!(buffer, b"\x1b]9;4;1;5\x07");
    }

    #[test]
    fn enable_with_detector_decides_enablement() {
        for (verdict, expected) in [(false, &b""[..]), (true, &b"\x1b]9;4;1;5\x07"[..])]
        {
            let mut buffer = Vec::new();
            let mut progress =
                ProgressWriter::new(&mut buffer).enable_with(|_| verdict);

            progress.set_percent(5).unwrap();

            assert_eq!(buffer, expected);
        }
    }

    #[test]
    fn convenience_methods_map_to_states() {
        let mut buffer = Vec::new();
        let mut progress = ProgressWriter::new(&mut buffer);

        progress.set_percent(42).unwrap();
        progress.error(7).unwrap();
        progress.warning(99).unwrap();
        progress.indeterminate().unwrap();
        progress.clear().unwrap();

        assert_eq!(
            buffer,
            b"\x1b]9;4;1;42\x07\x1b]9;4;2;7\x07\x1b]9;4;4;99\x07\x1b]9;4;3;0\x07\x1b]9;4;0;0\x07"
                .to_vec()
        );
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let mut buffer = Vec::new();
        let mut progress = ProgressWriter::new(&mut buffer);

        let result = progress.set(ProgressState::Normal, 101);

        assert!(matches!(result, Err(Osc94Error::PercentOutOfRange(101))));
        assert!(buffer.is_empty());
    }

    #[test]
    fn sink_write_failure_propagates() {
        let mut progress = ProgressWriter::new(FailingSink);

        let result = progress.set(ProgressState::Normal, 50);

        assert!(matches!(result, Err(Osc94Error::Write(_))));
    }

    #[test]
    fn disabled_writer_skips_the_sink_entirely() {
        let mut progress = ProgressWriter::new(FailingSink).enabled(false);

        progress.set(ProgressState::Normal, 50).unwrap();
    }
}
