//! N-up grid imposition
//!
//! Consecutive pages tile a columns × rows grid in reading order. For
//! duplex work an equal-size back grid is read from the continuing page
//! cursor and emitted with its columns mirrored, so that after the sheet
//! flips left over right each back page sits behind its front partner.
//! Rows are not mirrored.

use crate::types::PrintMethod;

use super::sequence::pad_to_multiple;
use super::{PageRef, Placement, Sheet};

pub(crate) fn compute(
    pages: &[PageRef],
    method: PrintMethod,
    columns: usize,
    rows: usize,
) -> Vec<Sheet> {
    let columns = columns.max(1);
    let rows = rows.max(1);

    if pages.is_empty() {
        return Vec::new();
    }

    let per_sheet = columns * rows;
    let multiple = if method.is_duplex() {
        per_sheet * 2
    } else {
        per_sheet
    };
    let pages = pad_to_multiple(pages.to_vec(), multiple);

    let cell_width = 1.0 / columns as f32;
    let cell_height = 1.0 / rows as f32;
    let cell = |page: PageRef, row: usize, col: usize| {
        Placement::new(
            page,
            col as f32 * cell_width,
            row as f32 * cell_height,
            cell_width,
            cell_height,
        )
    };

    let mut sheets = Vec::with_capacity(pages.len() / multiple);
    let mut cursor = 0;

    while cursor < pages.len() {
        let mut front = Vec::with_capacity(per_sheet);
        for row in 0..rows {
            for col in 0..columns {
                front.push(cell(pages[cursor], row, col));
                cursor += 1;
            }
        }

        let mut back = Vec::new();
        if method.is_duplex() {
            let grid = &pages[cursor..cursor + per_sheet];
            cursor += per_sheet;

            for row in 0..rows {
                for col in 0..columns {
                    // Column mirrored against the front; blanks are
                    // omitted rather than placed
                    let mirrored = (columns - 1) - col;
                    let page = grid[row * columns + mirrored];
                    if !page.is_blank() {
                        back.push(cell(page, row, col));
                    }
                }
            }
        }

        sheets.push(Sheet::unbound(front, back));
    }

    sheets
}
