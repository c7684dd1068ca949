//! Creep (shingling) compensation
//!
//! Inner sheets of a folded signature sit further from the spine than the
//! outermost one by the accumulated paper thickness, so their content
//! must shift laterally to stay flush after folding and trimming. The
//! shift grows linearly with the sheet's depth in the signature.
//!
//! The direction test assumes a single vertical gutter at the horizontal
//! center of the sheet. Grids with more than one gutter are not covered
//! by this rule; they simply get no shift outside the band test below.

use crate::constants::{GUTTER_BAND_HIGH, GUTTER_BAND_LOW};
use crate::layout::Sheet;

/// The lateral shift for a sheet, in mm.
///
/// `paper_thickness_mm` is the thickness of one folded sheet; the default
/// job configuration of 0.0 turns the whole calculation into a no-op.
pub fn sheet_shift_mm(sheet: &Sheet, paper_thickness_mm: f32) -> f32 {
    sheet.sheet_index as f32 * paper_thickness_mm
}

/// The signed offset for one placed item, from its left-edge fraction.
///
/// Items left of the gutter move outward by `+shift`, items right of it
/// inward by `-shift`; an item straddling the gutter band stays put. The
/// identical offset must feed both content placement and crop marks.
pub fn item_offset_mm(x_fraction: f32, shift_mm: f32) -> f32 {
    if x_fraction < GUTTER_BAND_LOW {
        shift_mm
    } else if x_fraction > GUTTER_BAND_HIGH {
        -shift_mm
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Sheet;

    fn sheet_at(index: usize) -> Sheet {
        Sheet {
            front: Vec::new(),
            back: Vec::new(),
            sheet_index: index,
            sheets_in_signature: 4,
            signature_index: 0,
            total_signatures: 1,
        }
    }

    #[test]
    fn test_shift_grows_with_depth() {
        let t = 0.1;
        let mut previous = -1.0_f32;
        for index in 0..4 {
            let shift = sheet_shift_mm(&sheet_at(index), t);
            assert!(shift.abs() >= previous);
            previous = shift.abs();
        }
        assert_eq!(sheet_shift_mm(&sheet_at(3), t), 0.3);
    }

    #[test]
    fn test_zero_thickness_is_noop() {
        assert_eq!(sheet_shift_mm(&sheet_at(5), 0.0), 0.0);
        assert_eq!(item_offset_mm(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_direction_by_gutter_side() {
        assert_eq!(item_offset_mm(0.0, 0.2), 0.2);
        assert_eq!(item_offset_mm(0.48, 0.2), 0.2);
        assert_eq!(item_offset_mm(0.5, 0.2), 0.0);
        assert_eq!(item_offset_mm(0.52, 0.2), -0.2);
        assert_eq!(item_offset_mm(1.0, 0.2), -0.2);
    }

    #[test]
    fn test_band_edges_unshifted() {
        assert_eq!(item_offset_mm(0.49, 0.2), 0.0);
        assert_eq!(item_offset_mm(0.51, 0.2), 0.0);
    }
}
