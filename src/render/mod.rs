//! Page rasterisation collaborator.

pub mod pdfiumrenderer;

use anyhow::Result;
use image::ImageBuffer;

use crate::geom::{PageSize, RenderContext};

pub type PageImage = ImageBuffer<image::Rgb<u8>, Vec<u8>>;

/// A rasterised page together with the [RenderContext] captured for it.
/// Selections drawn on the image must store this context; it is what makes
/// them mappable after the page is re-rendered at other parameters.
pub struct RenderedPage {
    pub image: PageImage,
    pub context: RenderContext,
}

/// Supplies page metadata and rasterisation for a PDF given as bytes.
pub trait PageRenderer {
    /// Reads the size in points of every page, in page order.
    fn page_sizes(&self, pdf_bytes: &[u8]) -> Result<Vec<PageSize>>;

    /// Rasterises a single page at the given scale factor.
    fn render_page(&self, pdf_bytes: &[u8], page_index: usize, scale: f32)
    -> Result<RenderedPage>;
}
