//! # CSV Emission
//!
//! Writes field records as a two-column `name,type` CSV.

use crate::constants::{COLUMN_NAME, COLUMN_TYPE};
use crate::errors::MappingError;
use crate::types::FieldRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::{self, Write};
use tracing::debug;

/// Writes the `name,type` header followed by one row per record to `out`.
///
/// Rows keep the order of `records`. Fields containing a comma, a quote or a
/// line break are quoted, with embedded quotes doubled. The writer is flushed
/// but not closed; pass `&mut` to keep using the stream afterwards.
pub fn emit<W: Write>(records: &[FieldRecord], out: W) -> Result<(), MappingError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record([COLUMN_NAME, COLUMN_TYPE])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    debug!("Wrote {} CSV rows", records.len());
    Ok(())
}

/// Renders the records as a complete CSV document in memory.
pub fn to_csv_string(records: &[FieldRecord]) -> Result<String, MappingError> {
    let mut buffer = Vec::new();
    emit(records, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| MappingError::Csv(io::Error::new(io::ErrorKind::InvalidData, e).into()))
}
