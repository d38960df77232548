//! Pretty-printed JSON documents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Write `value` to `path` as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if the file cannot be created or `value` fails to
/// serialize.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(path = %path.display(), "JSON export written");
    Ok(())
}
