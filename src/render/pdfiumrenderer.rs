//! [PageRenderer] implementation on the Pdfium library.

use anyhow::{Context, Result, anyhow};
use pdfium_render::prelude::{PdfDocument, PdfRenderConfig, Pdfium};

use super::{PageRenderer, RenderedPage};
use crate::geom::{PageSize, PdfPoints, RenderContext};

pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Binds to a Pdfium library found alongside the executable, falling
    /// back to one installed on the system.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .with_context(|| "binding to Pdfium library")?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    fn load<'a>(&'a self, pdf_bytes: &'a [u8]) -> Result<PdfDocument<'a>> {
        self.pdfium
            .load_pdf_from_byte_slice(pdf_bytes, None)
            .with_context(|| "loading PDF document")
    }
}

impl PageRenderer for PdfiumRenderer {
    fn page_sizes(&self, pdf_bytes: &[u8]) -> Result<Vec<PageSize>> {
        let document = self.load(pdf_bytes)?;
        Ok(document
            .pages()
            .iter()
            .map(|page| {
                let size = page.page_size();
                PageSize {
                    width: PdfPoints::from_f32(size.width().value),
                    height: PdfPoints::from_f32(size.height().value),
                }
            })
            .collect())
    }

    fn render_page(
        &self,
        pdf_bytes: &[u8],
        page_index: usize,
        scale: f32,
    ) -> Result<RenderedPage> {
        let document = self.load(pdf_bytes)?;
        let index: u16 = page_index
            .try_into()
            .map_err(|_| anyhow!("page index {} too large for Pdfium", page_index))?;
        let page = document
            .pages()
            .get(index)
            .with_context(|| format!("getting page {}", page_index))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let image = page
            .render_with_config(&config)
            .with_context(|| format!("rendering page {}", page_index))?
            .as_image()
            .into_rgb8();

        let context = RenderContext {
            scale,
            image_width: image.width(),
            image_height: image.height(),
        };
        Ok(RenderedPage { image, context })
    }
}
