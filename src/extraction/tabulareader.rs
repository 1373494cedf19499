//! [TableReader] implementation on the Tabula JVM.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::TableReader;
use crate::geom::{PageOrigin, PageRect};
use crate::table::{Row, Table};

/// Extraction algorithm for Tabula to use.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ExtractionMethod {
    /// Detects cell boundaries from whitespace between columns.
    Stream,
    /// Detects cell boundaries from ruling lines.
    Lattice,
    /// Lets Tabula choose between stream and lattice.
    Guess,
}

impl ExtractionMethod {
    fn to_tabula_extraction_method(self) -> tabula::ExtractionMethod {
        match self {
            ExtractionMethod::Stream => tabula::ExtractionMethod::Basic,
            ExtractionMethod::Guess => tabula::ExtractionMethod::Decide,
            ExtractionMethod::Lattice => tabula::ExtractionMethod::Spreadsheet,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(transparent)]
struct JsonTableSet(Vec<JsonTable>);

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
struct JsonTable {
    extraction_method: String,
    page_number: i32,
    top: f32,
    left: f32,
    width: f32,
    height: f32,
    right: f32,
    bottom: f32,
    data: Vec<JsonRow>,
}

#[derive(Deserialize, Debug)]
struct JsonRow(Vec<JsonCell>);

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
struct JsonCell {
    top: f32,
    left: f32,
    width: f32,
    height: f32,
    text: String,
}

impl From<JsonTable> for Table {
    fn from(value: JsonTable) -> Self {
        Table(value.data.into_iter().map(Into::into).collect())
    }
}

impl From<JsonRow> for Row {
    fn from(value: JsonRow) -> Self {
        Row(value.0.into_iter().map(|cell| cell.text).collect())
    }
}

/// Client wrapper around Tabula.
pub struct TabulaReader {
    vm: tabula::TabulaVM,
    method: ExtractionMethod,
}

impl TabulaReader {
    /// Creates a [TabulaReader] against the Tabula JAR at `libpath`.
    pub fn new(libpath: &str, method: ExtractionMethod) -> Result<Self> {
        let vm = tabula::TabulaVM::new(libpath, false).with_context(|| "initialising Tabula")?;
        Ok(TabulaReader { vm, method })
    }
}

impl TableReader for TabulaReader {
    fn origin(&self) -> PageOrigin {
        // Tabula page areas use the origin at the top-left of the page.
        PageOrigin::TopLeft
    }

    fn read_region(
        &self,
        pdf_path: &Path,
        page_index: usize,
        rect: &PageRect,
    ) -> Result<Vec<Table>> {
        // Tabula page numbers are 1-based.
        let pages = [page_index as i32 + 1];
        let page_areas = [(
            tabula::ABSOLUTE_AREA_CALCULATION_MODE,
            tabula::Rectangle::from_coords(
                rect.left.to_f32(),
                rect.top.to_f32(),
                rect.right.to_f32(),
                rect.bottom.to_f32(),
            ),
        )];

        let env = self.vm.attach().with_context(|| "attaching to TabulaVM")?;
        let tabula = env
            .configure_tabula(
                Some(&page_areas),
                Some(&pages),
                tabula::OutputFormat::Json,
                false,
                self.method.to_tabula_extraction_method(),
                false,
                None,
            )
            .with_context(|| "configuring Tabula to extract tables")?;

        let extracted_file = tempfile::NamedTempFile::new()?;
        tabula.parse_document_into(pdf_path, extracted_file.path())?;
        let result: JsonTableSet = serde_json::from_reader(extracted_file)
            .with_context(|| "parsing JSON output from Tabula")?;

        Ok(result.0.into_iter().map(Into::into).collect())
    }
}
