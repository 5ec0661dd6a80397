// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with: `cargo run --example main`
//!
//! Watch the terminal's tab or taskbar while this runs. If the terminal does
//! not support OSC 9;4 nothing visible happens; set `OSC94_FORCE=1` to emit
//! the sequences anyway.

use std::{io::{Write, stdout},
          thread::sleep,
          time::Duration};

use r3bl_osc94::{Osc94Error, ProgressWriter, detect};

fn main() -> Result<(), Osc94Error> {
    println!("OSC 9;4 support detected: {}", detect(&stdout()));

    let mut progress = ProgressWriter::new(stdout()).auto_enable();

    // Ramp a normal progress bar from 0 to 100%.
    {
        for percent in (0u8..=100).step_by(5) {
            progress.set_percent(percent)?;
            // Sequences contain no newline, so flush past line buffering.
            stdout().flush()?;
            sleep(Duration::from_millis(50));
        }
    }

    // Indeterminate: the terminal animates without a percentage.
    {
        progress.indeterminate()?;
        stdout().flush()?;
        sleep(Duration::from_secs(1));
    }

    // Warning and error states keep a percentage visible.
    {
        progress.warning(75)?;
        stdout().flush()?;
        sleep(Duration::from_secs(1));

        progress.error(75)?;
        stdout().flush()?;
        sleep(Duration::from_secs(1));
    }

    // Remove the indicator.
    progress.clear()?;
    stdout().flush()?;
    println!("Done.");

    Ok(())
}
