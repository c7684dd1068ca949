use press_impose::creep::{item_offset_mm, sheet_shift_mm};
use press_impose::*;

#[test]
fn test_shift_monotonic_across_signature() {
    let sheets = compute_sheets(
        ImpositionKind::SaddleStitch,
        PrintMethod::Sheetwise,
        32,
        &LayoutParams::default(),
    );
    assert_eq!(sheets.len(), 8);

    let thickness = 0.12;
    let mut previous = f32::MIN;
    for sheet in &sheets {
        let shift = sheet_shift_mm(sheet, thickness).abs();
        assert!(shift >= previous);
        previous = shift;
    }
}

#[test]
fn test_outermost_sheet_unshifted() {
    let sheets = compute_sheets(
        ImpositionKind::SaddleStitch,
        PrintMethod::Sheetwise,
        16,
        &LayoutParams::default(),
    );
    assert_eq!(sheet_shift_mm(&sheets[0], 0.1), 0.0);
}

#[test]
fn test_shift_resets_per_signature() {
    let sheets = compute_sheets(
        ImpositionKind::PerfectBound,
        PrintMethod::Sheetwise,
        64,
        &LayoutParams {
            signature_size: 16,
            ..Default::default()
        },
    );

    // Four signatures of four sheets each; the outermost sheet of every
    // signature sits flush again
    for signature in sheets.chunks(4) {
        assert_eq!(sheet_shift_mm(&signature[0], 0.1), 0.0);
        assert!(sheet_shift_mm(&signature[3], 0.1) > 0.0);
    }
}

#[test]
fn test_offset_direction_follows_gutter_side() {
    let shift = 0.3;
    // Left leaf of a folded sheet moves outward
    assert_eq!(item_offset_mm(0.0, shift), shift);
    // Right leaf moves inward
    assert_eq!(item_offset_mm(0.5, shift), 0.0);
    assert_eq!(item_offset_mm(0.52, shift), -shift);
    // The gutter band itself never moves
    assert_eq!(item_offset_mm(0.49, shift), 0.0);
    assert_eq!(item_offset_mm(0.51, shift), 0.0);
}

#[test]
fn test_default_thickness_is_noop() {
    let sheets = compute_sheets(
        ImpositionKind::SaddleStitch,
        PrintMethod::Sheetwise,
        32,
        &LayoutParams::default(),
    );
    for sheet in &sheets {
        assert_eq!(sheet_shift_mm(sheet, 0.0), 0.0);
    }
}
