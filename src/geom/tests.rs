use googletest::prelude::*;
use test_casing::{TestCases, cases, test_casing};

use super::{
    GeometryError, PageOrigin, PageRect, PageSize, PdfPoints, PixelRect, RenderContext,
    to_page_rect, to_pixel_rect,
};

/// US Letter page, as used by the scenario in the mapping contract.
fn letter_page() -> PageSize {
    PageSize {
        width: PdfPoints::from_f32(612.0),
        height: PdfPoints::from_f32(792.0),
    }
}

/// Letter page rendered at scale factor 2.
const LETTER_AT_2X: RenderContext = RenderContext {
    scale: 2.0,
    image_width: 1224,
    image_height: 1584,
};

const SELECTION: PixelRect = PixelRect {
    x0: 100.0,
    y0: 100.0,
    x1: 400.0,
    y1: 300.0,
};

#[derive(Debug)]
struct MappingCase {
    origin: PageOrigin,
    pixel: PixelRect,
    page: (f32, f32, f32, f32),
}

const MAPPING_CASES: TestCases<MappingCase> = cases! {
    [
        MappingCase {
            origin: PageOrigin::TopLeft,
            pixel: SELECTION,
            page: (50.0, 50.0, 200.0, 150.0),
        },
        MappingCase {
            origin: PageOrigin::BottomLeft,
            pixel: SELECTION,
            page: (50.0, 742.0, 200.0, 642.0),
        },
        // Degenerate but normalised rectangle maps without error.
        MappingCase {
            origin: PageOrigin::TopLeft,
            pixel: PixelRect { x0: 0.0, y0: 0.0, x1: 0.0, y1: 0.0 },
            page: (0.0, 0.0, 0.0, 0.0),
        },
        // Full image maps to the full page.
        MappingCase {
            origin: PageOrigin::TopLeft,
            pixel: PixelRect { x0: 0.0, y0: 0.0, x1: 1224.0, y1: 1584.0 },
            page: (0.0, 0.0, 612.0, 792.0),
        },
        MappingCase {
            origin: PageOrigin::BottomLeft,
            pixel: PixelRect { x0: 0.0, y0: 0.0, x1: 1224.0, y1: 1584.0 },
            page: (0.0, 792.0, 612.0, 0.0),
        },
    ]
};

#[test_casing(5, MAPPING_CASES)]
#[gtest]
fn test_to_page_rect(case: MappingCase) {
    let actual = to_page_rect(&case.pixel, &LETTER_AT_2X, &letter_page(), case.origin)
        .expect("mapping should succeed");
    let (left, top, right, bottom) = case.page;
    let expected = PageRect {
        left: PdfPoints::from_f32(left),
        top: PdfPoints::from_f32(top),
        right: PdfPoints::from_f32(right),
        bottom: PdfPoints::from_f32(bottom),
    };
    expect_that!(actual, eq(expected));
}

#[test_casing(5, MAPPING_CASES)]
#[gtest]
fn test_to_pixel_rect_inverts_to_page_rect(case: MappingCase) {
    let page = letter_page();
    let page_rect = to_page_rect(&case.pixel, &LETTER_AT_2X, &page, case.origin)
        .expect("mapping should succeed");
    let recovered = to_pixel_rect(&page_rect, &LETTER_AT_2X, &page, case.origin)
        .expect("inverse mapping should succeed");
    expect_that!(recovered.x0, near(case.pixel.x0, 1e-3));
    expect_that!(recovered.y0, near(case.pixel.y0, 1e-3));
    expect_that!(recovered.x1, near(case.pixel.x1, 1e-3));
    expect_that!(recovered.y1, near(case.pixel.y1, 1e-3));
}

#[gtest]
fn test_to_page_rect_is_monotonic_in_pixel_coordinates() {
    let page = letter_page();
    let grown = PixelRect {
        x1: SELECTION.x1 + 8.0,
        y1: SELECTION.y1 + 8.0,
        ..SELECTION
    };

    let base = to_page_rect(&SELECTION, &LETTER_AT_2X, &page, PageOrigin::TopLeft)
        .expect("mapping should succeed");
    let moved = to_page_rect(&grown, &LETTER_AT_2X, &page, PageOrigin::TopLeft)
        .expect("mapping should succeed");
    expect_that!(moved.right.to_f32(), near(base.right.to_f32() + 4.0, 1e-3));
    expect_that!(moved.bottom.to_f32(), near(base.bottom.to_f32() + 4.0, 1e-3));

    // Under the bottom-left convention growing pixel y shrinks page y.
    let base = to_page_rect(&SELECTION, &LETTER_AT_2X, &page, PageOrigin::BottomLeft)
        .expect("mapping should succeed");
    let moved = to_page_rect(&grown, &LETTER_AT_2X, &page, PageOrigin::BottomLeft)
        .expect("mapping should succeed");
    expect_that!(moved.right.to_f32(), near(base.right.to_f32() + 4.0, 1e-3));
    expect_that!(moved.bottom.to_f32(), near(base.bottom.to_f32() - 4.0, 1e-3));
}

#[gtest]
fn test_to_page_rect_rejects_zero_sized_render_context() {
    let context = RenderContext {
        scale: 2.0,
        image_width: 0,
        image_height: 1584,
    };
    let result = to_page_rect(&SELECTION, &context, &letter_page(), PageOrigin::TopLeft);
    expect_that!(
        result,
        err(eq(&GeometryError::EmptyRenderContext {
            width: 0,
            height: 1584,
        }))
    );
}

#[gtest]
fn test_to_page_rect_rejects_unnormalised_rectangle() {
    let swapped = PixelRect {
        x0: 400.0,
        y0: 100.0,
        x1: 100.0,
        y1: 300.0,
    };
    let result = to_page_rect(&swapped, &LETTER_AT_2X, &letter_page(), PageOrigin::TopLeft);
    expect_that!(
        result,
        err(matches_pattern!(GeometryError::NotNormalised { .. }))
    );
}

#[gtest]
fn test_to_page_rect_rejects_zero_sized_page() {
    let page = PageSize {
        width: PdfPoints::from_f32(0.0),
        height: PdfPoints::from_f32(792.0),
    };
    let result = to_page_rect(&SELECTION, &LETTER_AT_2X, &page, PageOrigin::TopLeft);
    expect_that!(result, err(matches_pattern!(GeometryError::EmptyPage { .. })));
}

#[gtest]
fn test_pixel_rect_from_corners_normalises_any_drag_direction() {
    let expected = PixelRect {
        x0: 10.0,
        y0: 20.0,
        x1: 30.0,
        y1: 40.0,
    };
    expect_that!(PixelRect::from_corners((10.0, 20.0), (30.0, 40.0)), eq(expected));
    expect_that!(PixelRect::from_corners((30.0, 40.0), (10.0, 20.0)), eq(expected));
    expect_that!(PixelRect::from_corners((30.0, 20.0), (10.0, 40.0)), eq(expected));
    expect_that!(PixelRect::from_corners((10.0, 40.0), (30.0, 20.0)), eq(expected));
}

#[gtest]
fn test_pdf_points_round_trips_through_f32() {
    let points = PdfPoints::from_f32(50.25);
    expect_that!(points.to_f32(), near(50.25, 1e-4));
    expect_that!(PdfPoints::from_quantised(4096).to_f32(), near(1.0, 1e-6));
}
