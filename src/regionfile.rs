//! JSON file format for regions authored outside the program.
//!
//! Each entry records the pixel rectangle of a selection together with the
//! render context that was in force when it was drawn. Entries pass through
//! the same validating constructors as interactively drawn selections.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::geom::{GeometryError, PixelRect, RenderContext};
use crate::region::Region;

#[derive(Deserialize, Debug)]
#[serde(transparent)]
struct RegionFile(Vec<RegionEntry>);

#[derive(Deserialize, Debug)]
struct RegionEntry {
    page: usize,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    scale: f32,
    image_width: u32,
    image_height: u32,
}

impl TryFrom<RegionEntry> for Region {
    type Error = GeometryError;

    fn try_from(entry: RegionEntry) -> Result<Self, GeometryError> {
        let pixel_rect = PixelRect::from_corners((entry.x0, entry.y0), (entry.x1, entry.y1));
        let context = RenderContext {
            scale: entry.scale,
            image_width: entry.image_width,
            image_height: entry.image_height,
        };
        Region::new(entry.page, pixel_rect, context)
    }
}

/// Loads and validates the regions in the JSON file at `path`, in file order.
pub fn load(path: &Path) -> Result<Vec<Region>> {
    let file = File::open(path).with_context(|| format!("opening region file {:?}", path))?;
    let entries: RegionFile = serde_json::from_reader(file)
        .with_context(|| format!("parsing region file {:?}", path))?;

    entries
        .0
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Region::try_from(entry).with_context(|| format!("region entry {} invalid", index))
        })
        .collect()
}
