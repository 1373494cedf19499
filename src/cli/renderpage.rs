use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::document::PageIndexError;
use crate::geom::{self, PageOrigin, PixelRect};
use crate::regionfile;
use crate::render::pdfiumrenderer::PdfiumRenderer;
use crate::render::{PageImage, PageRenderer};

/// Renders one page of a PDF to a PNG image and prints the page metrics
/// needed to author region entries for it.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF.
    input_pdf: PathBuf,

    /// Zero-based index of the page to render.
    page: usize,

    /// Path to write the PNG image to.
    output: PathBuf,

    /// Scale factor to render the page at.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Outline this region file's selections for the page on the image.
    #[arg(long)]
    regions: Option<PathBuf>,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let renderer = PdfiumRenderer::new()?;

    let pdf_bytes = std::fs::read(&cmd.input_pdf)
        .with_context(|| format!("reading input PDF {:?}", cmd.input_pdf))?;
    let pages = renderer
        .page_sizes(&pdf_bytes)
        .with_context(|| "reading page sizes")?;
    let page_size = pages.get(cmd.page).ok_or(PageIndexError {
        index: cmd.page,
        page_count: pages.len(),
    })?;

    let mut rendered = renderer
        .render_page(&pdf_bytes, cmd.page, cmd.scale)
        .with_context(|| format!("rendering page {}", cmd.page))?;

    println!(
        "Page size: {:.2}x{:.2} pt",
        page_size.width.to_f32(),
        page_size.height.to_f32()
    );
    println!(
        "Image size: {}x{} px",
        rendered.context.image_width, rendered.context.image_height
    );
    println!("Scale: {}", rendered.context.scale);

    if let Some(regions_path) = &cmd.regions {
        let regions = regionfile::load(regions_path)?;
        for region in regions
            .iter()
            .filter(|region| region.page_index() == cmd.page)
        {
            // Selections were drawn against their own render context, which
            // may differ from this render. Map through page space to place
            // them on this image.
            let page_rect = geom::to_page_rect(
                region.pixel_rect(),
                region.context(),
                page_size,
                PageOrigin::TopLeft,
            )?;
            let pixel_rect =
                geom::to_pixel_rect(&page_rect, &rendered.context, page_size, PageOrigin::TopLeft)?;
            draw_rect(&mut rendered.image, &pixel_rect, image::Rgb([255, 0, 0]));
        }
    }

    rendered
        .image
        .save_with_format(&cmd.output, image::ImageFormat::Png)
        .with_context(|| format!("writing image to {:?}", cmd.output))?;

    Ok(())
}

/// Draws the outline of `rect`, clamped to the image bounds.
fn draw_rect(img: &mut PageImage, rect: &PixelRect, pixel: image::Rgb<u8>) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let max_x = img.width() - 1;
    let max_y = img.height() - 1;
    let l = (rect.x0.round().max(0.0) as u32).min(max_x);
    let t = (rect.y0.round().max(0.0) as u32).min(max_y);
    let r = (rect.x1.round().max(0.0) as u32).min(max_x);
    let b = (rect.y1.round().max(0.0) as u32).min(max_y);

    for x in l..=r {
        img.put_pixel(x, t, pixel);
        img.put_pixel(x, b, pixel);
    }
    for y in t..=b {
        img.put_pixel(l, y, pixel);
        img.put_pixel(r, y, pixel);
    }
}
