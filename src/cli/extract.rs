use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use simple_bar::ProgressBar;

use crate::document::Document;
use crate::export::{CsvSink, ExportSink};
use crate::extraction::tabulareader::{ExtractionMethod, TabulaReader};
use crate::extraction::{ExtractEvents, RegionFailure};
use crate::merge::MergeOptions;
use crate::regionfile;
use crate::render::PageRenderer;
use crate::render::pdfiumrenderer::PdfiumRenderer;
use crate::session::Session;

/// Extracts the tables within each selected region of the input PDF and
/// merges them into a single CSV file.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF.
    input_pdf: PathBuf,

    /// Path to the JSON file listing the selected regions.
    regions: PathBuf,

    /// Path to write the merged CSV file to.
    output: PathBuf,

    /// Path to Tabula JAR file.
    #[arg(long)]
    tabula_libpath: String,

    /// Table detection algorithm.
    #[arg(long, value_enum, default_value_t = ExtractionMethod::Stream)]
    method: ExtractionMethod,

    /// Emit a blank separator row between the tables of consecutive regions.
    #[arg(long)]
    group_separators: bool,

    /// Do not display a progress bar.
    #[arg(long)]
    no_progress: bool,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let reader = TabulaReader::new(&cmd.tabula_libpath, cmd.method)?;
    let renderer = PdfiumRenderer::new()?;

    let pdf_bytes = std::fs::read(&cmd.input_pdf)
        .with_context(|| format!("reading input PDF {:?}", cmd.input_pdf))?;
    let pages = renderer
        .page_sizes(&pdf_bytes)
        .with_context(|| "reading page sizes")?;
    let mut session = Session::new(Document::new(pdf_bytes, pages));

    let regions = regionfile::load(&cmd.regions)?;
    for (index, region) in regions.into_iter().enumerate() {
        let inserted = session
            .add_region(region)
            .with_context(|| format!("adding region {}", index))?;
        if !inserted {
            log::info!("Region {} duplicates an earlier region; skipped.", index);
        }
    }

    let options = MergeOptions {
        group_separators: cmd.group_separators,
    };
    let mut events = EventDisplayer::new(!cmd.no_progress);
    let outcome = session.run_extraction(&reader, &options, &mut events)?;

    for failure in &outcome.failures {
        eprintln!(
            "Region {} (page {}) failed: {:#}.",
            failure.region_index, failure.page_index, failure.error
        );
    }

    let merged = outcome
        .table()
        .with_context(|| "merging extracted tables")?;

    let mut out_file = File::create(&cmd.output)
        .with_context(|| format!("creating output file {:?}", cmd.output))?;
    CsvSink.export(merged, &mut out_file)?;

    Ok(())
}

struct EventDisplayer {
    enabled: bool,
    progress_bar: Option<ProgressBar>,
}

impl EventDisplayer {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            progress_bar: None,
        }
    }
}

impl ExtractEvents for EventDisplayer {
    fn on_progress(&mut self, _completed: usize, total: usize) {
        if !self.enabled {
            return;
        }

        let progress_bar: &mut ProgressBar = match self.progress_bar.as_mut() {
            Some(progress_bar) => progress_bar,
            None => {
                let progress_bar = ProgressBar::cargo_style(total as u32, 80, true);
                self.progress_bar = Some(progress_bar);
                self.progress_bar.as_mut().unwrap()
            }
        };

        progress_bar.update();
    }

    fn on_region_failed(&mut self, failure: &RegionFailure) {
        log::warn!(
            "Continuing after failed region {} on page {}.",
            failure.region_index,
            failure.page_index
        );
    }

    fn on_end(&mut self) {}
}
