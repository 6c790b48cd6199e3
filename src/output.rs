//! Rendering query results

use crate::config::OutputFormat;
use std::io::{self, Write};

/// Write each item on its own line, with no header or summary
pub fn write_lines<W, I, S>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        writeln!(out, "{}", item.as_ref())?;
    }
    Ok(())
}

/// Write the items as one pretty-printed JSON array of strings
pub fn write_json<W, S>(out: &mut W, items: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let strings: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    serde_json::to_writer_pretty(&mut *out, &strings)?;
    writeln!(out)
}

/// Write `items` in the requested format
pub fn render<W, S>(out: &mut W, items: &[S], format: OutputFormat) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    match format {
        OutputFormat::Text => write_lines(out, items),
        OutputFormat::Json => write_json(out, items),
    }
}
