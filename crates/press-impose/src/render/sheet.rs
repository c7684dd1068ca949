//! Surface rendering
//!
//! Turns one printed surface into an output PDF page: content frames for
//! every placed page (embedded source pages or numbered proof
//! placeholders), then the planned marks on top. Layout geometry arrives
//! in top-down millimeters and is flipped into bottom-up PDF points here.

use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::constants::{
    CROP_MARK_LINE_MM, HELVETICA_CHAR_WIDTH_RATIO, PLACEHOLDER_FONT_SIZE_PT,
    REGISTRATION_MARK_LINE_MM, REGISTRATION_MARK_SIZE_MM, SHEET_MARK_MARGIN_MM, SLUG_FONT_SIZE_PT,
    mm_to_pt,
};
use crate::cover::CoverDimensions;
use crate::layout::{Placement, Sheet, SurfaceSide};
use crate::marks::{MarkContext, MarkRect, SurfaceMarks, plan_surface_marks, trimmed_box_mm};
use crate::options::JobOptions;
use crate::types::Result;

use super::xobject::{page_dimensions_pt, page_xobject};

/// Where surface content comes from
pub(crate) enum SurfaceContent<'a> {
    /// Numbered placeholder frames (proof output)
    Placeholder,
    /// Pages embedded from a source document
    Source {
        document: &'a Document,
        page_ids: &'a [ObjectId],
    },
}

/// A rectangle in PDF points, origin at the bottom-left
#[derive(Debug, Clone, Copy)]
struct PdfRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

fn to_pdf_rect(b: &MarkRect, sheet_height_mm: f32) -> PdfRect {
    PdfRect {
        x: mm_to_pt(b.x),
        y: mm_to_pt(sheet_height_mm - b.y - b.height),
        width: mm_to_pt(b.width),
        height: mm_to_pt(b.height),
    }
}

fn to_pdf_point(x_mm: f32, y_mm: f32, sheet_height_mm: f32) -> (f32, f32) {
    (mm_to_pt(x_mm), mm_to_pt(sheet_height_mm - y_mm))
}

/// Render one surface of a sheet to a new output page.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_surface(
    output: &mut Document,
    content: &SurfaceContent<'_>,
    items: &[Placement],
    sheet: &Sheet,
    side: SurfaceSide,
    ctx: &MarkContext,
    options: &JobOptions,
    pages_tree_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let width_pt = mm_to_pt(ctx.sheet_width_mm);
    let height_pt = mm_to_pt(ctx.sheet_height_mm);

    let mut ops: Vec<String> = Vec::new();
    let mut xobjects = Dictionary::new();
    let mut needs_font = options.marks.slug_line;

    for (idx, item) in items.iter().enumerate() {
        let Some(page_number) = item.page.number() else {
            continue;
        };
        let frame = to_pdf_rect(&trimmed_box_mm(item, ctx), ctx.sheet_height_mm);

        match content {
            SurfaceContent::Placeholder => {
                ops.push(placeholder_ops(page_number, &frame));
                needs_font = true;
            }
            SurfaceContent::Source { document, page_ids } => {
                if let Some(&source_id) = page_ids.get(page_number - 1) {
                    let name = format!("P{}", idx);
                    let xobject_id = page_xobject(output, document, source_id, cache)?;
                    xobjects.set(name.as_bytes(), Object::Reference(xobject_id));

                    let source_dims = page_dimensions_pt(document, source_id)?;
                    ops.push(placement_ops(&name, &frame, source_dims, item.rotation));
                }
            }
        }
    }

    let marks = plan_surface_marks(items, sheet, side, ctx);
    ops.push(marks_ops(&marks, options, ctx.sheet_height_mm));

    let page_id = assemble_page(
        output,
        pages_tree_id,
        width_pt,
        height_pt,
        ops.concat(),
        xobjects,
        needs_font,
    );
    Ok(page_id)
}

/// Render the optional cover page: full cover spread with dashed crease
/// lines at the spine and panel labels.
pub(crate) fn render_cover(
    output: &mut Document,
    cover: &CoverDimensions,
    pages_tree_id: ObjectId,
) -> ObjectId {
    let width_pt = mm_to_pt(cover.width_mm);
    let height_pt = mm_to_pt(cover.height_mm);
    let center = width_pt / 2.0;
    let half_spine = mm_to_pt(cover.spine_mm) / 2.0;

    let mut ops = String::new();

    // Crease lines either side of the spine
    ops.push_str(&format!(
        "q {} w 1 1 1 1 K [4 2] 0 d\n",
        mm_to_pt(REGISTRATION_MARK_LINE_MM)
    ));
    ops.push_str(&format!(
        "{} 0 m {} {} l S\n",
        center - half_spine,
        center - half_spine,
        height_pt
    ));
    ops.push_str(&format!(
        "{} 0 m {} {} l S\n",
        center + half_spine,
        center + half_spine,
        height_pt
    ));
    ops.push_str("Q\n");

    let label = |text: &str, center_x: f32| {
        let text_width = text.len() as f32 * SLUG_FONT_SIZE_PT * HELVETICA_CHAR_WIDTH_RATIO;
        format!(
            "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            SLUG_FONT_SIZE_PT,
            center_x - text_width / 2.0,
            height_pt / 2.0,
            text
        )
    };
    ops.push_str(&label("BACK", (center - half_spine) / 2.0));
    ops.push_str(&label("FRONT", center + half_spine + (width_pt - center - half_spine) / 2.0));
    ops.push_str(&label("SPINE", center));

    assemble_page(
        output,
        pages_tree_id,
        width_pt,
        height_pt,
        ops,
        Dictionary::new(),
        true,
    )
}

/// Build the page dictionary, content stream and resources.
fn assemble_page(
    output: &mut Document,
    pages_tree_id: ObjectId,
    width_pt: f32,
    height_pt: f32,
    content: String,
    xobjects: Dictionary,
    needs_font: bool,
) -> ObjectId {
    let mut resources = Dictionary::new();
    if !xobjects.is_empty() {
        resources.set("XObject", Object::Dictionary(xobjects));
    }
    if needs_font {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        let font_id = output.add_object(font_dict);

        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));
    }

    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_tree_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}

/// Place a source page XObject scaled to fit its frame, centered.
fn placement_ops(
    name: &str,
    frame: &PdfRect,
    (src_width, src_height): (f32, f32),
    rotation: f32,
) -> String {
    let scale = (frame.width / src_width).min(frame.height / src_height);
    let tx = frame.x + (frame.width - src_width * scale) / 2.0;
    let ty = frame.y + (frame.height - src_height * scale) / 2.0;

    if rotation.abs() > 0.1 {
        // 180 degrees: negative scale around the far corner
        let rx = tx + src_width * scale;
        let ry = ty + src_height * scale;
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            -scale, -scale, rx, ry, name
        )
    } else {
        format!("q {} 0 0 {} {} {} cm /{} Do Q\n", scale, scale, tx, ty, name)
    }
}

/// Proof placeholder: a light frame with the page number centered.
fn placeholder_ops(page_number: usize, frame: &PdfRect) -> String {
    let label = format!("p. {}", page_number);
    let text_width = label.len() as f32 * PLACEHOLDER_FONT_SIZE_PT * HELVETICA_CHAR_WIDTH_RATIO;
    let text_x = frame.x + frame.width / 2.0 - text_width / 2.0;
    let text_y = frame.y + frame.height / 2.0 - PLACEHOLDER_FONT_SIZE_PT / 2.0;

    format!(
        "q 0.5 G 0.25 w {} {} {} {} re S Q\nBT /F1 {} Tf {} {} Td ({}) Tj ET\n",
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        PLACEHOLDER_FONT_SIZE_PT,
        text_x,
        text_y,
        label
    )
}

/// Draw the planned marks. All strokes and fills use 100% of every
/// separation so they survive on each printing plate.
fn marks_ops(marks: &SurfaceMarks, options: &JobOptions, sheet_height_mm: f32) -> String {
    let mut ops = String::new();
    ops.push_str("q\n");

    if options.marks.crop_marks && !marks.crop_lines.is_empty() {
        ops.push_str(&format!(
            "{} w 1 1 1 1 K\n",
            mm_to_pt(CROP_MARK_LINE_MM)
        ));
        for seg in &marks.crop_lines {
            let (x1, y1) = to_pdf_point(seg.x1, seg.y1, sheet_height_mm);
            let (x2, y2) = to_pdf_point(seg.x2, seg.y2, sheet_height_mm);
            ops.push_str(&format!("{} {} m {} {} l S\n", x1, y1, x2, y2));
        }
    }

    if options.marks.registration_marks {
        ops.push_str(&format!(
            "{} w 1 1 1 1 K\n",
            mm_to_pt(REGISTRATION_MARK_LINE_MM)
        ));
        let arm = mm_to_pt(REGISTRATION_MARK_SIZE_MM) / 2.0;
        for &(cx_mm, cy_mm) in &marks.registration {
            let (cx, cy) = to_pdf_point(cx_mm, cy_mm, sheet_height_mm);
            ops.push_str(&format!("{} {} m {} {} l S\n", cx - arm, cy, cx + arm, cy));
            ops.push_str(&format!("{} {} m {} {} l S\n", cx, cy - arm, cx, cy + arm));
        }
    }

    if options.marks.fold_line {
        if let Some(fold) = &marks.fold_line {
            let (x1, y1) = to_pdf_point(fold.x1, fold.y1, sheet_height_mm);
            let (x2, y2) = to_pdf_point(fold.x2, fold.y2, sheet_height_mm);
            ops.push_str(&format!(
                "{} w 1 1 1 1 K [4 2] 0 d {} {} m {} {} l S [] 0 d\n",
                mm_to_pt(REGISTRATION_MARK_LINE_MM),
                x1,
                y1,
                x2,
                y2
            ));
        }
    }

    if options.marks.color_bar {
        for patch in &marks.color_bar {
            let (c, m, y, k) = patch.cmyk;
            let rect = to_pdf_rect(&patch.rect, sheet_height_mm);
            ops.push_str(&format!(
                "{} {} {} {} k {} {} {} {} re f\n",
                c, m, y, k, rect.x, rect.y, rect.width, rect.height
            ));
        }
    }

    if options.marks.collation_marks {
        if let Some(block) = &marks.collation {
            let rect = to_pdf_rect(block, sheet_height_mm);
            ops.push_str(&format!(
                "1 1 1 1 k {} {} {} {} re f\n",
                rect.x, rect.y, rect.width, rect.height
            ));
        }
    }

    if options.marks.slug_line {
        ops.push_str(&format!(
            "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            SLUG_FONT_SIZE_PT,
            mm_to_pt(SHEET_MARK_MARGIN_MM * 2.0),
            mm_to_pt(2.0),
            marks.slug
        ));
    }

    ops.push_str("Q\n");
    ops
}
