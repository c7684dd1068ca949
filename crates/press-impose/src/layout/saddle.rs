//! Saddle-stitch imposition
//!
//! A folded booklet: the page list is consumed from both ends at once,
//! four pages per physical sheet. The outermost sheet carries the last
//! page on the left of its front and the first page on the right, the
//! standard outside of a folded quire.
//!
//! ```text
//! 8-page booklet:
//!
//! Sheet 0 front: [8 | 1]    Sheet 0 back: [2 | 7]
//! Sheet 1 front: [6 | 3]    Sheet 1 back: [4 | 5]
//! ```

use crate::types::PrintMethod;

use super::sequence::pad_to_multiple;
use super::{PageRef, Placement, Sheet};

/// Lay out a page list as a saddle-stitched quire.
///
/// Pads to a multiple of 4 and walks two convergent cursors, emitting one
/// sheet per four pages. Under `Simplex` each surface becomes its own
/// one-sided sheet; both keep the fold position of the duplex sheet they
/// came from.
pub(crate) fn compute(pages: &[PageRef], method: PrintMethod) -> Vec<Sheet> {
    if pages.is_empty() {
        return Vec::new();
    }

    let pages = pad_to_multiple(pages.to_vec(), 4);
    let quire_sheets = pages.len() / 4;
    let mut sheets = Vec::with_capacity(quire_sheets * 2);

    let mut l = 0;
    let mut r = pages.len() - 1;

    for index in 0..quire_sheets {
        // Outside of the folded sheet: [last | first]
        let front = vec![
            Placement::half(pages[r], 0.0),
            Placement::half(pages[l], 0.5),
        ];
        // Inside: [second | second-to-last]
        let back = vec![
            Placement::half(pages[l + 1], 0.0),
            Placement::half(pages[r - 1], 0.5),
        ];

        if method.is_duplex() {
            sheets.push(Sheet::in_quire(front, back, index, quire_sheets));
        } else {
            sheets.push(Sheet::in_quire(front, Vec::new(), index, quire_sheets));
            sheets.push(Sheet::in_quire(back, Vec::new(), index, quire_sheets));
        }

        l += 2;
        r -= 2;
    }

    sheets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page_run;

    fn numbers(items: &[Placement]) -> Vec<Option<usize>> {
        items.iter().map(|i| i.page.number()).collect()
    }

    #[test]
    fn test_eight_page_pairing() {
        let sheets = compute(&page_run(8), PrintMethod::Sheetwise);
        assert_eq!(sheets.len(), 2);

        assert_eq!(numbers(&sheets[0].front), vec![Some(8), Some(1)]);
        assert_eq!(numbers(&sheets[0].back), vec![Some(2), Some(7)]);
        assert_eq!(numbers(&sheets[1].front), vec![Some(6), Some(3)]);
        assert_eq!(numbers(&sheets[1].back), vec![Some(4), Some(5)]);
    }

    #[test]
    fn test_half_sheet_geometry() {
        let sheets = compute(&page_run(4), PrintMethod::Sheetwise);
        let front = &sheets[0].front;
        assert_eq!(front[0].x, 0.0);
        assert_eq!(front[1].x, 0.5);
        assert!(front.iter().all(|i| i.width == 0.5 && i.height == 1.0));
    }

    #[test]
    fn test_pads_to_multiple_of_four() {
        let sheets = compute(&page_run(6), PrintMethod::Sheetwise);
        assert_eq!(sheets.len(), 2);
        // Outermost front: [blank | 1]
        assert_eq!(numbers(&sheets[0].front), vec![None, Some(1)]);
    }

    #[test]
    fn test_simplex_splits_surfaces() {
        let sheets = compute(&page_run(8), PrintMethod::Simplex);
        assert_eq!(sheets.len(), 4);
        assert!(sheets.iter().all(|s| s.back.is_empty()));
        assert_eq!(sheets[0].sheet_index, 0);
        assert_eq!(sheets[1].sheet_index, 0);
        assert_eq!(sheets[2].sheet_index, 1);
    }

    #[test]
    fn test_quire_metadata() {
        let sheets = compute(&page_run(16), PrintMethod::Sheetwise);
        assert_eq!(sheets.len(), 4);
        for (i, sheet) in sheets.iter().enumerate() {
            assert_eq!(sheet.sheet_index, i);
            assert_eq!(sheet.sheets_in_signature, 4);
        }
    }

    #[test]
    fn test_work_and_turn_matches_sheetwise() {
        let a = compute(&page_run(12), PrintMethod::Sheetwise);
        let b = compute(&page_run(12), PrintMethod::WorkAndTurn);
        let c = compute(&page_run(12), PrintMethod::WorkAndTumble);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}
