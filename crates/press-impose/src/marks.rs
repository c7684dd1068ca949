//! Mark placement planning
//!
//! Derives the geometry of everything the renderer draws besides page
//! content: crop marks around each trimmed box, the collation staircase
//! block for multi-signature work, registration crosses, the CMYK color
//! bar, the spine fold line and the slug text.
//!
//! All geometry is planned in millimeters with the origin at the top-left
//! of the surface; the renderer converts to PDF points. Planning is pure:
//! every parameter that influences the result arrives in [`MarkContext`],
//! and the creep shift applied here is the same one the renderer applies
//! to content, so content and marks can never drift apart.

use crate::constants::{
    COLLATION_BAND_BOTTOM, COLLATION_BAND_TOP, COLLATION_MARK_WIDTH_MM, COLOR_BAR_CLEARANCE_MM,
    COLOR_BAR_PATCH_MM, CROP_MARK_LENGTH_MM, CROP_MARK_OFFSET_MM, EDGE_TOLERANCE,
    SHEET_MARK_MARGIN_MM,
};
use crate::creep::item_offset_mm;
use crate::layout::{Placement, Sheet, SurfaceSide};

/// A straight mark stroke, in mm from the top-left of the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// A filled mark rectangle, in mm from the top-left of the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One color-bar patch with its CMYK fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPatch {
    pub rect: MarkRect,
    pub cmyk: (f32, f32, f32, f32),
}

/// Everything that shapes the marks of one surface, threaded explicitly
/// so no drawing routine depends on ambient state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkContext {
    pub sheet_width_mm: f32,
    pub sheet_height_mm: f32,
    /// Inter-item gap; a nonzero gap makes every trimmed box fully
    /// external
    pub gap_mm: f32,
    /// Lateral creep shift for this sheet (see [`crate::creep`])
    pub creep_shift_mm: f32,
    /// Bound layouts get a dashed fold line at the spine
    pub spine_fold: bool,
    /// 1-based position of the sheet in the whole job, for the slug
    pub sheet_ordinal: usize,
    pub sheet_count: usize,
}

/// The planned marks for one printed surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMarks {
    pub crop_lines: Vec<MarkSegment>,
    pub fold_line: Option<MarkSegment>,
    /// Centers of the registration crosses
    pub registration: Vec<(f32, f32)>,
    pub color_bar: Vec<ColorPatch>,
    /// Collation staircase block, only for multi-signature sheets
    pub collation: Option<MarkRect>,
    pub slug: String,
}

/// The trimmed content box of a placed item, in mm.
///
/// Shrinks the item's cell by half the gap on each side and applies the
/// creep offset for the item's gutter side. The renderer places content
/// in this exact box and the planner draws crop marks around it.
pub fn trimmed_box_mm(item: &Placement, ctx: &MarkContext) -> MarkRect {
    let offset = item_offset_mm(item.x, ctx.creep_shift_mm);
    MarkRect {
        x: item.x * ctx.sheet_width_mm + ctx.gap_mm / 2.0 + offset,
        y: item.y * ctx.sheet_height_mm + ctx.gap_mm / 2.0,
        width: item.width * ctx.sheet_width_mm - ctx.gap_mm,
        height: item.height * ctx.sheet_height_mm - ctx.gap_mm,
    }
}

/// Plan all marks for one surface of a sheet.
pub fn plan_surface_marks(
    items: &[Placement],
    sheet: &Sheet,
    side: SurfaceSide,
    ctx: &MarkContext,
) -> SurfaceMarks {
    let mut crop_lines = Vec::new();
    for item in items {
        if item.page.is_blank() {
            continue;
        }
        crop_lines.extend(item_crop_lines(item, ctx));
    }

    let fold_line = ctx.spine_fold.then(|| MarkSegment {
        x1: ctx.sheet_width_mm / 2.0,
        y1: 0.0,
        x2: ctx.sheet_width_mm / 2.0,
        y2: ctx.sheet_height_mm,
    });

    SurfaceMarks {
        crop_lines,
        fold_line,
        registration: registration_centers(ctx),
        color_bar: color_bar_patches(ctx),
        collation: collation_mark(sheet, ctx),
        slug: slug_text(sheet, side, ctx),
    }
}

/// Crop marks for one item: two strokes per external edge.
///
/// An edge is external when the item touches the surface boundary there,
/// within a small tolerance. With a nonzero gap every edge counts as
/// external, since the gap already separates the box from its neighbors.
fn item_crop_lines(item: &Placement, ctx: &MarkContext) -> Vec<MarkSegment> {
    let all_external = ctx.gap_mm > 0.0;
    let left = all_external || item.x <= EDGE_TOLERANCE;
    let right = all_external || item.x + item.width >= 1.0 - EDGE_TOLERANCE;
    let top = all_external || item.y <= EDGE_TOLERANCE;
    let bottom = all_external || item.y + item.height >= 1.0 - EDGE_TOLERANCE;

    let b = trimmed_box_mm(item, ctx);
    let near = CROP_MARK_OFFSET_MM;
    let far = CROP_MARK_OFFSET_MM + CROP_MARK_LENGTH_MM;

    let mut lines = Vec::new();
    let mut stroke = |x1, y1, x2, y2| lines.push(MarkSegment { x1, y1, x2, y2 });

    if top {
        stroke(b.x, b.y - far, b.x, b.y - near);
        stroke(b.x + b.width, b.y - far, b.x + b.width, b.y - near);
    }
    if bottom {
        stroke(b.x, b.y + b.height + near, b.x, b.y + b.height + far);
        stroke(
            b.x + b.width,
            b.y + b.height + near,
            b.x + b.width,
            b.y + b.height + far,
        );
    }
    if left {
        stroke(b.x - far, b.y, b.x - near, b.y);
        stroke(b.x - far, b.y + b.height, b.x - near, b.y + b.height);
    }
    if right {
        stroke(b.x + b.width + near, b.y, b.x + b.width + far, b.y);
        stroke(
            b.x + b.width + near,
            b.y + b.height,
            b.x + b.width + far,
            b.y + b.height,
        );
    }

    lines
}

/// Registration cross centers: the four corners plus the four edge
/// midpoints, inset by a fixed margin.
fn registration_centers(ctx: &MarkContext) -> Vec<(f32, f32)> {
    let m = SHEET_MARK_MARGIN_MM;
    let w = ctx.sheet_width_mm;
    let h = ctx.sheet_height_mm;
    vec![
        (m, m),
        (w / 2.0, m),
        (w - m, m),
        (m, h - m),
        (w / 2.0, h - m),
        (w - m, h - m),
        (m, h / 2.0),
        (w - m, h / 2.0),
    ]
}

/// Four CMYK patches centered at the bottom of the sheet.
fn color_bar_patches(ctx: &MarkContext) -> Vec<ColorPatch> {
    let patch = COLOR_BAR_PATCH_MM;
    let start_x = ctx.sheet_width_mm / 2.0 - (4.0 * patch) / 2.0;
    let y = ctx.sheet_height_mm - SHEET_MARK_MARGIN_MM - patch - COLOR_BAR_CLEARANCE_MM;

    let inks = [
        (1.0, 0.0, 0.0, 0.0),
        (0.0, 1.0, 0.0, 0.0),
        (0.0, 0.0, 1.0, 0.0),
        (0.0, 0.0, 0.0, 1.0),
    ];

    inks.iter()
        .enumerate()
        .map(|(i, &cmyk)| ColorPatch {
            rect: MarkRect {
                x: start_x + i as f32 * patch,
                y,
                width: patch,
                height: patch,
            },
            cmyk,
        })
        .collect()
}

/// The collation staircase block at the spine.
///
/// Each signature's block sits one slot lower than the previous one
/// inside the working band, so a correctly gathered book block shows a
/// clean diagonal on its spine. Single-signature work gets no mark.
fn collation_mark(sheet: &Sheet, ctx: &MarkContext) -> Option<MarkRect> {
    if sheet.total_signatures <= 1 {
        return None;
    }

    let band_top = COLLATION_BAND_TOP * ctx.sheet_height_mm;
    let band_height = (COLLATION_BAND_BOTTOM - COLLATION_BAND_TOP) * ctx.sheet_height_mm;
    let slot = band_height / sheet.total_signatures as f32;

    Some(MarkRect {
        x: ctx.sheet_width_mm / 2.0 - COLLATION_MARK_WIDTH_MM / 2.0,
        y: band_top + sheet.signature_index as f32 * slot,
        width: COLLATION_MARK_WIDTH_MM,
        height: slot,
    })
}

/// Descriptive slug line for bindery staff.
fn slug_text(sheet: &Sheet, side: SurfaceSide, ctx: &MarkContext) -> String {
    format!(
        "sheet {}/{} - signature {}/{} - {}",
        ctx.sheet_ordinal,
        ctx.sheet_count,
        sheet.signature_index + 1,
        sheet.total_signatures,
        side.label()
    )
}
