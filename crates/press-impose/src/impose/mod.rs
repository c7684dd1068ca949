//! Imposition pipeline orchestration
//!
//! This module drives the full job:
//! 1. Determine the source page count
//! 2. Run the pure layout calculation
//! 3. Render every surface (and the optional cover) to an output PDF
//!
//! The calculation itself is synchronous and pure; the async entry points
//! only wrap file IO and push the rendering onto a blocking task.

mod io;

pub use io::{load_pdf, save_pdf, sniff_page_count, sniff_page_count_file};

use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::cover::cover_dimensions;
use crate::creep;
use crate::layout::compute_sheets;
use crate::marks::MarkContext;
use crate::options::JobOptions;
use crate::render::{SurfaceContent, render_cover, render_surface};
use crate::types::*;

/// Impose a source document onto press sheets.
///
/// A source with zero pages produces an output with zero sheets; that is
/// "nothing to do", not an error.
pub async fn impose(source: &Document, options: &JobOptions) -> Result<Document> {
    let source = source.clone();
    let options = options.clone();
    tokio::task::spawn_blocking(move || impose_sync(&source, &options)).await?
}

/// Produce a proof document with numbered placeholder frames instead of
/// source content, for checking a layout before the pages exist.
pub async fn impose_proof(total_pages: usize, options: &JobOptions) -> Result<Document> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        render_job(&SurfaceContent::Placeholder, total_pages, &options)
    })
    .await?
}

fn impose_sync(source: &Document, options: &JobOptions) -> Result<Document> {
    let pages = source.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();
    let total_pages = page_ids.len();

    render_job(
        &SurfaceContent::Source {
            document: source,
            page_ids: &page_ids,
        },
        total_pages,
        options,
    )
}

fn render_job(
    content: &SurfaceContent<'_>,
    total_pages: usize,
    options: &JobOptions,
) -> Result<Document> {
    let sheets = compute_sheets(
        options.imposition,
        options.print_method,
        total_pages,
        &options.layout_params(),
    );
    let (sheet_width_mm, sheet_height_mm) = options.sheet_dimensions_mm();

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();
    let mut cache = HashMap::new();

    // The cover leads the document; a grid of loose items has nothing to
    // wrap, so N-up jobs never get one
    if let Some(cover) = options.cover {
        if options.imposition != ImpositionKind::NUp {
            let dims = cover_dimensions(sheet_width_mm / 2.0, sheet_height_mm, cover.spine_mm);
            let cover_id = render_cover(&mut output, &dims, pages_tree_id);
            page_refs.push(Object::Reference(cover_id));
        }
    }

    let sheet_count = sheets.len();
    for (index, sheet) in sheets.iter().enumerate() {
        let ctx = MarkContext {
            sheet_width_mm,
            sheet_height_mm,
            gap_mm: options.gap_mm,
            creep_shift_mm: creep::sheet_shift_mm(sheet, options.creep_per_sheet_mm),
            spine_fold: options.is_bound(),
            sheet_ordinal: index + 1,
            sheet_count,
        };

        for (side, items) in sheet.surfaces() {
            let page_id = render_surface(
                &mut output,
                content,
                items,
                sheet,
                side,
                &ctx,
                options,
                pages_tree_id,
                &mut cache,
            )?;
            page_refs.push(Object::Reference(page_id));
        }
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Create pages tree and catalog, finalize document structure
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
