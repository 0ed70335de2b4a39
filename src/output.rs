//! Line-delimited JSON output
//!
//! Writes the common statistics first, then one object per block. Each object
//! sits on its own line; nothing wraps them in an array.

use std::io::Write;

use serde::Serialize;

use crate::error::BlockstatError;
use crate::stats::Report;

/// Write `report` as JSON lines and flush the writer
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> Result<(), BlockstatError> {
    write_line(writer, &report.common)?;
    for block in &report.blocks {
        write_line(writer, block)?;
    }
    writer.flush()?;

    log::debug!("Wrote {} JSON line(s)", report.blocks.len() + 1);
    Ok(())
}

fn write_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), BlockstatError> {
    // Serialize before writing so stream failures surface as `Io`
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    writer.write_all(&line)?;
    Ok(())
}
