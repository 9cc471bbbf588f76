use anyhow::Result;
use std::io::Write;

use crate::cli::OutputFormat;

/// Write transcript lines in the requested format
pub fn write_transcript<W: Write>(writer: &mut W, lines: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, lines)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Print transcript lines to stdout
pub fn print_to_console(lines: &[String], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_transcript(&mut handle, lines, format)
}
