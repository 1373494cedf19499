//! Tabular data as ordered rows of cell strings.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use anyhow::{Context, Result};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table(pub Vec<Row>);

impl Table {
    /// Writes the rows as CSV records. Rows may have differing widths.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(out);

        for row in &self.0 {
            csv_writer
                .write_record(&row.0)
                .with_context(|| "writing record")?;
        }

        // Check for error rather than implicitly flushing and ignoring.
        csv_writer.flush().with_context(|| "flushing to CSV")?;
        Ok(())
    }
}

impl Deref for Table {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Table {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for Table
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Table(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Row {
    /// Returns `true` if every cell is the empty string (or the row has no
    /// cells at all).
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|cell| cell.is_empty())
    }
}

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}
