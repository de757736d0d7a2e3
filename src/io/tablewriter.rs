//! CSV table writer.
//!
//! Columns are written in table order (the index column, if any, is first).
//! Missing values are written as empty strings.
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::types::TweetTable;

/// Write `table` at `dst`, creating parent folders if needed.
pub fn write_table(table: &TweetTable, dst: &Path) -> Result<(), Error> {
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    debug!("writing {} rows to {:?}", table.len(), dst);
    let writer = csv::WriterBuilder::new().from_path(dst)?;
    write_to(table, writer)
}

/// Write `table` into any sink (see [write_table]).
pub fn write_table_to<W: Write>(table: &TweetTable, dst: W) -> Result<(), Error> {
    write_to(table, csv::WriterBuilder::new().from_writer(dst))
}

fn write_to<W: Write>(table: &TweetTable, mut writer: csv::Writer<W>) -> Result<(), Error> {
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(table.columns().iter().map(|c| row.get_or_empty(c)))?;
    }
    writer.flush()?;
    Ok(())
}
