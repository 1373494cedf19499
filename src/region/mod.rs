//! User-selected page regions and the ordered registry holding them.


use crate::geom::{GeometryError, PixelRect, RenderContext};

/// Minimum selection width and height in pixels. Anything smaller is treated
/// as an accidental click rather than a deliberate selection.
pub const MIN_SELECTION_PX: f32 = 10.0;

/// Coordinate tolerance in pixels within which two selections on the same
/// page are considered the same region.
pub const DEDUP_TOLERANCE_PX: f32 = 5.0;

/// A rectangular selection on one rendered page.
///
/// The render context is the one captured when the selection was drawn. The
/// same page may later be re-rendered at other parameters, so mapping the
/// selection back to page space must always use this context rather than
/// whichever context is current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    page_index: usize,
    pixel_rect: PixelRect,
    context: RenderContext,
}

impl Region {
    /// Creates a validated [Region]. Rejects selections at or below
    /// [MIN_SELECTION_PX] in either dimension, and render contexts with a
    /// zero-sized image.
    pub fn new(
        page_index: usize,
        pixel_rect: PixelRect,
        context: RenderContext,
    ) -> Result<Self, GeometryError> {
        if pixel_rect.width() <= MIN_SELECTION_PX || pixel_rect.height() <= MIN_SELECTION_PX {
            return Err(GeometryError::SelectionTooSmall {
                width: pixel_rect.width(),
                height: pixel_rect.height(),
                min: MIN_SELECTION_PX,
            });
        }
        if context.image_width == 0 || context.image_height == 0 {
            return Err(GeometryError::EmptyRenderContext {
                width: context.image_width,
                height: context.image_height,
            });
        }

        Ok(Self {
            page_index,
            pixel_rect,
            context,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn pixel_rect(&self) -> &PixelRect {
        &self.pixel_rect
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Returns `true` if `other` selects the same area: same page, and all
    /// four rectangle coordinates within [DEDUP_TOLERANCE_PX].
    fn is_equivalent(&self, other: &Region) -> bool {
        let a = &self.pixel_rect;
        let b = &other.pixel_rect;
        self.page_index == other.page_index
            && (a.x0 - b.x0).abs() < DEDUP_TOLERANCE_PX
            && (a.y0 - b.y0).abs() < DEDUP_TOLERANCE_PX
            && (a.x1 - b.x1).abs() < DEDUP_TOLERANCE_PX
            && (a.y1 - b.y1).abs() < DEDUP_TOLERANCE_PX
    }
}

/// Error raised by positional removal of a region that does not exist.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
#[error("region index {index} out of range for registry of {len} regions")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Ordered collection of selected regions. Insertion order determines the row
/// order of the final merged table.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `region`, unless an equivalent region is already present.
    /// Returns `true` if the region was inserted.
    ///
    /// Re-render events can replay existing selections, so equivalence within
    /// the tolerance deduplicates rather than erroring.
    pub fn add(&mut self, region: Region) -> bool {
        if self.regions.iter().any(|held| held.is_equivalent(&region)) {
            return false;
        }
        self.regions.push(region);
        true
    }

    /// Removes and returns the region at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Region, IndexOutOfRange> {
        if index >= self.regions.len() {
            return Err(IndexOutOfRange {
                index,
                len: self.regions.len(),
            });
        }
        Ok(self.regions.remove(index))
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterates over all regions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Iterates over the regions selected on one page, in insertion order.
    /// Used to overlay existing selections when a page is re-rendered.
    pub fn regions_for_page(&self, page_index: usize) -> impl Iterator<Item = &Region> {
        self.regions
            .iter()
            .filter(move |region| region.page_index == page_index)
    }
}
