//! Sinks that serialise a merged table to an output artifact.

use std::io::Write;

use anyhow::Result;

use crate::merge::MergedTable;

/// Serialises a merged table. The in-tree sink writes CSV; workbook sinks
/// with header styling and column sizing implement the same trait, using
/// [MergedTable::has_header] to find the header row.
pub trait ExportSink {
    fn export(&self, merged: &MergedTable, out: &mut dyn Write) -> Result<()>;
}

/// Writes the merged table as a single CSV sheet.
pub struct CsvSink;

impl ExportSink for CsvSink {
    fn export(&self, merged: &MergedTable, out: &mut dyn Write) -> Result<()> {
        merged.table.write_csv(out)
    }
}
