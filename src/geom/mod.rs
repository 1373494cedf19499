//! Geometry types and conversions between pixel space and page space.

#[cfg(test)]
mod tests;

/// Measurement of space within a PDF page, 1 = 1/72 of an inch.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PdfPoints(i64);

impl PdfPoints {
    /// Fraction of a point that can be represented.
    const PRECISION: f32 = 4096.0;

    #[cfg(test)]
    pub const fn from_quantised(quantised: i64) -> Self {
        Self(quantised)
    }

    /// Creates a [PdfPoints] with the given [f32] value.
    pub fn from_f32(value: f32) -> Self {
        let quantised = (value * Self::PRECISION).round() as i64;
        Self(quantised)
    }

    /// Returns the number of PDF points as an [f32] value.
    pub fn to_f32(self) -> f32 {
        (self.0 as f32) / Self::PRECISION
    }
}

impl std::fmt::Debug for PdfPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PdfPoints")
            .field(&self.0)
            .field(&self.to_f32())
            .finish()
    }
}

/// Error raised by malformed geometry: a selection below the minimum size, or
/// a render context or page with a zero dimension.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("selection of {width}x{height} px is below the minimum of {min}x{min} px")]
    SelectionTooSmall { width: f32, height: f32, min: f32 },
    #[error("render context has zero-sized image {width}x{height} px")]
    EmptyRenderContext { width: u32, height: u32 },
    #[error("page has zero size {width:?}x{height:?}")]
    EmptyPage { width: PdfPoints, height: PdfPoints },
    #[error("pixel rectangle ({x0},{y0})-({x1},{y1}) is not normalised")]
    NotNormalised { x0: f32, y0: f32, x1: f32, y1: f32 },
}

/// Rectangle within a rendered page image. Origin at the top-left of the
/// image, measured in pixels. Always normalised: `x0 <= x1 && y0 <= y1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PixelRect {
    /// Creates a [PixelRect] from two opposite corners, in either drag
    /// direction.
    pub fn from_corners((ax, ay): (f32, f32), (bx, by): (f32, f32)) -> Self {
        Self {
            x0: ax.min(bx),
            y0: ay.min(by),
            x1: ax.max(bx),
            y1: ay.max(by),
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Rectangle within a PDF page, measured in points.
///
/// The numeric ordering of `top` versus `bottom` depends on the
/// [PageOrigin] in force when the rectangle was produced: `top <= bottom`
/// under [PageOrigin::TopLeft], `bottom <= top` under
/// [PageOrigin::BottomLeft]. `left <= right` always holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageRect {
    pub left: PdfPoints,
    pub top: PdfPoints,
    pub right: PdfPoints,
    pub bottom: PdfPoints,
}

/// Dimensions of a PDF page in points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageSize {
    pub width: PdfPoints,
    pub height: PdfPoints,
}

/// Parameters that were in force when a page was rasterised: the scale factor
/// requested and the pixel dimensions of the resulting image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    pub scale: f32,
    pub image_width: u32,
    pub image_height: u32,
}

impl RenderContext {
    fn check(&self) -> Result<(), GeometryError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(GeometryError::EmptyRenderContext {
                width: self.image_width,
                height: self.image_height,
            });
        }
        Ok(())
    }
}

/// Vertical axis convention of a page-space coordinate system.
///
/// PDF page descriptions place the origin at the bottom-left of the page with
/// y increasing upwards, but several extraction engines instead use the
/// top-left with y increasing downwards (matching pixel space). Callers
/// select the convention required by the engine they target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageOrigin {
    TopLeft,
    BottomLeft,
}

fn page_scales(
    context: &RenderContext,
    page_size: &PageSize,
) -> Result<(f32, f32), GeometryError> {
    context.check()?;
    let page_width = page_size.width.to_f32();
    let page_height = page_size.height.to_f32();
    if page_width <= 0.0 || page_height <= 0.0 {
        return Err(GeometryError::EmptyPage {
            width: page_size.width,
            height: page_size.height,
        });
    }
    Ok((
        page_width / context.image_width as f32,
        page_height / context.image_height as f32,
    ))
}

/// Converts a pixel-space rectangle on a rendered page image into the
/// page-space rectangle it covers, under the given vertical axis convention.
pub fn to_page_rect(
    rect: &PixelRect,
    context: &RenderContext,
    page_size: &PageSize,
    origin: PageOrigin,
) -> Result<PageRect, GeometryError> {
    if rect.x0 > rect.x1 || rect.y0 > rect.y1 {
        return Err(GeometryError::NotNormalised {
            x0: rect.x0,
            y0: rect.y0,
            x1: rect.x1,
            y1: rect.y1,
        });
    }
    let (scale_x, scale_y) = page_scales(context, page_size)?;

    let left = PdfPoints::from_f32(rect.x0 * scale_x);
    let right = PdfPoints::from_f32(rect.x1 * scale_x);
    let (top, bottom) = match origin {
        PageOrigin::TopLeft => (
            PdfPoints::from_f32(rect.y0 * scale_y),
            PdfPoints::from_f32(rect.y1 * scale_y),
        ),
        PageOrigin::BottomLeft => {
            let page_height = page_size.height.to_f32();
            (
                PdfPoints::from_f32(page_height - rect.y0 * scale_y),
                PdfPoints::from_f32(page_height - rect.y1 * scale_y),
            )
        }
    };

    Ok(PageRect {
        left,
        top,
        right,
        bottom,
    })
}

/// Inverse of [to_page_rect]: projects a page-space rectangle onto a rendered
/// page image. The rectangle must have been produced under the same `origin`.
pub fn to_pixel_rect(
    rect: &PageRect,
    context: &RenderContext,
    page_size: &PageSize,
    origin: PageOrigin,
) -> Result<PixelRect, GeometryError> {
    let (scale_x, scale_y) = page_scales(context, page_size)?;

    let x0 = rect.left.to_f32() / scale_x;
    let x1 = rect.right.to_f32() / scale_x;
    let (y0, y1) = match origin {
        PageOrigin::TopLeft => (rect.top.to_f32() / scale_y, rect.bottom.to_f32() / scale_y),
        PageOrigin::BottomLeft => {
            let page_height = page_size.height.to_f32();
            (
                (page_height - rect.top.to_f32()) / scale_y,
                (page_height - rect.bottom.to_f32()) / scale_y,
            )
        }
    };

    Ok(PixelRect { x0, y0, x1, y1 })
}
