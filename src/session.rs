//! Session state: the loaded document and the selections made against it.

use anyhow::Result;

use crate::document::{Document, PageIndexError};
use crate::extraction::{self, ExtractEvents, RegionFailure, TableReader};
use crate::merge::{self, MergeOptions, MergedTable};
use crate::region::{IndexOutOfRange, Region, RegionRegistry};

/// Error raised by requesting an extraction batch while one is running.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
#[error("an extraction batch is already running")]
pub struct BusyError;

/// Error raised by an extraction batch that produced no rows at all. A
/// user-visible outcome rather than a crash.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
#[error("no rows were extracted from any selected region")]
pub struct EmptyResultError;

/// The result of one extraction batch: the merged table plus the regions
/// that failed, if any.
#[derive(Debug)]
pub struct ExtractOutcome {
    merged: MergedTable,
    pub failures: Vec<RegionFailure>,
}

impl ExtractOutcome {
    /// The merged table, or [EmptyResultError] if the batch produced no rows.
    pub fn table(&self) -> Result<&MergedTable, EmptyResultError> {
        if self.merged.table.is_empty() {
            return Err(EmptyResultError);
        }
        Ok(&self.merged)
    }
}

/// Owns the current [Document] and the [RegionRegistry] of selections made
/// against it. Created on document load; selections never outlive the
/// document they were drawn on.
pub struct Session {
    document: Document,
    registry: RegionRegistry,
    busy: bool,
}

impl Session {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            registry: RegionRegistry::new(),
            busy: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn regions(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Replaces the current document. Existing selections reference pages of
    /// the outgoing document, so the registry is cleared.
    pub fn load_document(&mut self, document: Document) {
        self.document = document;
        self.registry.clear();
    }

    /// Adds a selection, checking its page index against the current
    /// document. Returns `false` if an equivalent selection is already held.
    pub fn add_region(&mut self, region: Region) -> Result<bool, PageIndexError> {
        // Validate eagerly so a stale page index never reaches extraction.
        self.document.page_size(region.page_index())?;
        Ok(self.registry.add(region))
    }

    pub fn remove_region(&mut self, index: usize) -> Result<Region, IndexOutOfRange> {
        self.registry.remove(index)
    }

    pub fn clear_regions(&mut self) {
        self.registry.clear();
    }

    /// Runs one extraction batch over all selections in insertion order and
    /// merges the results.
    ///
    /// Rejects re-entry with [BusyError] while a batch is in flight; the
    /// busy flag clears when the batch ends, whether it succeeded or not.
    pub fn run_extraction(
        &mut self,
        reader: &dyn TableReader,
        options: &MergeOptions,
        events: &mut dyn ExtractEvents,
    ) -> Result<ExtractOutcome> {
        if self.busy {
            return Err(BusyError.into());
        }
        self.busy = true;

        let regions: Vec<&Region> = self.registry.iter().collect();
        let batch_result = extraction::run_batch(&self.document, &regions, reader, events);

        self.busy = false;
        let output = batch_result?;

        Ok(ExtractOutcome {
            merged: merge::merge(output.row_groups, options),
            failures: output.failures,
        })
    }

    #[cfg(test)]
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
