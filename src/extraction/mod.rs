//! Extraction of tabular content from selected page regions.

pub mod tabulareader;

use std::path::Path;

use anyhow::{Context, Result};

use crate::document::Document;
use crate::geom::{self, PageOrigin, PageRect};
use crate::region::Region;
use crate::table::{Row, Table};

/// Reads raw tables from a rectangular portion of a PDF page.
///
/// Implementations wrap a concrete extraction engine. Engines disagree on the
/// vertical axis convention of page coordinates, so each implementation
/// declares the one it expects via [TableReader::origin].
pub trait TableReader {
    /// The page-space axis convention of rectangles passed to
    /// [TableReader::read_region].
    fn origin(&self) -> PageOrigin;

    /// Reads zero or more tables found within `rect` on the page at
    /// `page_index` (zero-based) of the PDF at `pdf_path`.
    fn read_region(&self, pdf_path: &Path, page_index: usize, rect: &PageRect)
    -> Result<Vec<Table>>;
}

/// The rows extracted from one region: one raw table, with its first row
/// designated as the header when the table is large enough to have one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowGroup {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
}

impl RowGroup {
    /// Splits a raw table into a [RowGroup]. A table of two or more rows has
    /// its first row as the header; a single-row table is headerless; an
    /// empty table produces no group.
    pub fn from_raw_table(table: Table) -> Option<Self> {
        let mut rows = table.0;
        match rows.len() {
            0 => None,
            1 => Some(RowGroup { header: None, rows }),
            _ => {
                let header = rows.remove(0);
                Some(RowGroup {
                    header: Some(header),
                    rows,
                })
            }
        }
    }
}

/// A region the extraction engine could not process. Recorded in the batch
/// output rather than aborting the batch.
#[derive(Debug)]
pub struct RegionFailure {
    pub region_index: usize,
    pub page_index: usize,
    pub error: anyhow::Error,
}

/// Receives notifications as an extraction batch progresses.
pub trait ExtractEvents {
    fn on_progress(&mut self, completed: usize, total: usize);
    fn on_region_failed(&mut self, failure: &RegionFailure);
    fn on_end(&mut self);
}

/// Row groups and per-region failures accumulated by [run_batch].
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub row_groups: Vec<RowGroup>,
    pub failures: Vec<RegionFailure>,
}

/// Extracts every region in order against `reader`.
///
/// The document is materialised to a temporary file once for the whole batch
/// and removed when the batch ends, on success or failure. A region whose
/// page index is out of range fails the whole batch: stale regions are purged
/// when the document changes, so one reaching this point is a programming
/// error. An engine failure only fails its own region.
pub fn run_batch(
    document: &Document,
    regions: &[&Region],
    reader: &dyn TableReader,
    events: &mut dyn ExtractEvents,
) -> Result<BatchOutput> {
    let pdf_file = document
        .materialise()
        .with_context(|| "materialising document for extraction")?;

    let mut output = BatchOutput::default();
    for (region_index, region) in regions.iter().enumerate() {
        let page_size = document.page_size(region.page_index())?;
        let page_rect = geom::to_page_rect(
            region.pixel_rect(),
            region.context(),
            page_size,
            reader.origin(),
        )?;

        let read_result = reader
            .read_region(pdf_file.path(), region.page_index(), &page_rect)
            .with_context(|| format!("extracting tables for region {}", region_index));

        match read_result {
            Ok(tables) => {
                output
                    .row_groups
                    .extend(tables.into_iter().filter_map(RowGroup::from_raw_table));
            }
            Err(error) => {
                log::warn!(
                    "Extraction failed for region {} on page {}: {:#}",
                    region_index,
                    region.page_index(),
                    error
                );
                let failure = RegionFailure {
                    region_index,
                    page_index: region.page_index(),
                    error,
                };
                events.on_region_failed(&failure);
                output.failures.push(failure);
            }
        }

        events.on_progress(region_index + 1, regions.len());
    }

    events.on_end();
    Ok(output)
}
