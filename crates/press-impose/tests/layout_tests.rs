use press_impose::layout::{pad_to_multiple, page_run};
use press_impose::*;

fn sorted_pages(sheets: &[Sheet]) -> Vec<usize> {
    let mut pages: Vec<usize> = sheets.iter().flat_map(|s| s.page_numbers()).collect();
    pages.sort_unstable();
    pages
}

fn front_pages(sheet: &Sheet) -> Vec<Option<usize>> {
    sheet.front.iter().map(|i| i.page.number()).collect()
}

fn back_pages(sheet: &Sheet) -> Vec<Option<usize>> {
    sheet.back.iter().map(|i| i.page.number()).collect()
}

#[test]
fn test_every_page_placed_exactly_once() {
    let kinds = [
        ImpositionKind::SaddleStitch,
        ImpositionKind::PerfectBound,
        ImpositionKind::CutAndStack,
        ImpositionKind::NUp,
    ];
    let methods = [PrintMethod::Sheetwise, PrintMethod::Simplex];

    for kind in kinds {
        for method in methods {
            for total in [1, 3, 7, 8, 16, 40, 100] {
                let sheets = compute_sheets(kind, method, total, &LayoutParams::default());
                let expected: Vec<usize> = (1..=total).collect();
                assert_eq!(
                    sorted_pages(&sheets),
                    expected,
                    "pages lost or duplicated for {:?}/{:?}/{}",
                    kind,
                    method,
                    total
                );
            }
        }
    }
}

#[test]
fn test_zero_pages_yield_no_sheets() {
    for kind in [
        ImpositionKind::SaddleStitch,
        ImpositionKind::PerfectBound,
        ImpositionKind::CutAndStack,
        ImpositionKind::NUp,
    ] {
        let sheets = compute_sheets(kind, PrintMethod::Sheetwise, 0, &LayoutParams::default());
        assert!(sheets.is_empty());
    }
}

#[test]
fn test_saddle_eight_page_booklet() {
    let sheets = compute_sheets(
        ImpositionKind::SaddleStitch,
        PrintMethod::Sheetwise,
        8,
        &LayoutParams::default(),
    );

    assert_eq!(sheets.len(), 2);
    assert!(sheets.iter().all(|s| s.is_two_sided()));

    assert_eq!(front_pages(&sheets[0]), vec![Some(8), Some(1)]);
    assert_eq!(back_pages(&sheets[0]), vec![Some(2), Some(7)]);
    assert_eq!(front_pages(&sheets[1]), vec![Some(6), Some(3)]);
    assert_eq!(back_pages(&sheets[1]), vec![Some(4), Some(5)]);
}

#[test]
fn test_padding_minimal_and_idempotent() {
    for len in 0..13 {
        let once = pad_to_multiple(page_run(len), 4);
        let twice = pad_to_multiple(once.clone(), 4);
        assert_eq!(once, twice);
        assert_eq!(once.len(), len.div_ceil(4) * 4);
        assert!(once.len() >= len);
    }
}

#[test]
fn test_perfect_bound_signature_chunking() {
    let sheets = compute_sheets(
        ImpositionKind::PerfectBound,
        PrintMethod::Sheetwise,
        40,
        &LayoutParams {
            signature_size: 16,
            ..Default::default()
        },
    );

    // 16 + 16 + 8-padded-to-16, four sheets per signature
    assert_eq!(sheets.len(), 12);
    assert!(sheets.iter().all(|s| s.total_signatures == 3));

    let mut seen: Vec<usize> = sheets.iter().map(|s| s.signature_index).collect();
    seen.dedup();
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn test_perfect_bound_bad_signature_size_corrected() {
    let defaulted = compute_sheets(
        ImpositionKind::PerfectBound,
        PrintMethod::Sheetwise,
        40,
        &LayoutParams {
            signature_size: 6,
            ..Default::default()
        },
    );
    let sixteen = compute_sheets(
        ImpositionKind::PerfectBound,
        PrintMethod::Sheetwise,
        40,
        &LayoutParams {
            signature_size: 16,
            ..Default::default()
        },
    );
    assert_eq!(defaulted, sixteen);
}

#[test]
fn test_cut_stack_duplex_pairing() {
    let sheets = compute_sheets(
        ImpositionKind::CutAndStack,
        PrintMethod::Sheetwise,
        8,
        &LayoutParams::default(),
    );

    // Stacks [1..4] and [5..8]
    assert_eq!(sheets.len(), 2);
    assert_eq!(front_pages(&sheets[0]), vec![Some(1), Some(5)]);
    assert_eq!(back_pages(&sheets[0]), vec![Some(6), Some(2)]);
}

#[test]
fn test_nup_mirrored_backs() {
    let sheets = compute_sheets(
        ImpositionKind::NUp,
        PrintMethod::Sheetwise,
        4,
        &LayoutParams {
            columns: 2,
            rows: 1,
            ..Default::default()
        },
    );

    assert_eq!(sheets.len(), 1);
    assert_eq!(front_pages(&sheets[0]), vec![Some(1), Some(2)]);

    // Back grid reads [3, 4]; page 4 lands at column 0 so it backs page 1
    let back = &sheets[0].back;
    assert_eq!(back.len(), 2);
    assert_eq!((back[0].page.number(), back[0].x), (Some(4), 0.0));
    assert_eq!((back[1].page.number(), back[1].x), (Some(3), 0.5));
}

#[test]
fn test_placements_stay_inside_surface() {
    for kind in [
        ImpositionKind::SaddleStitch,
        ImpositionKind::PerfectBound,
        ImpositionKind::CutAndStack,
        ImpositionKind::NUp,
    ] {
        let sheets = compute_sheets(kind, PrintMethod::Sheetwise, 24, &LayoutParams::default());
        for item in sheets.iter().flat_map(|s| s.front.iter().chain(s.back.iter())) {
            assert!(item.x >= 0.0 && item.y >= 0.0);
            assert!(item.x + item.width <= 1.0 + 1e-6);
            assert!(item.y + item.height <= 1.0 + 1e-6);
        }
    }
}

#[test]
fn test_deterministic_output() {
    let params = LayoutParams::default();
    for kind in [
        ImpositionKind::SaddleStitch,
        ImpositionKind::PerfectBound,
        ImpositionKind::CutAndStack,
        ImpositionKind::NUp,
    ] {
        let first = compute_sheets(kind, PrintMethod::Sheetwise, 36, &params);
        let second = compute_sheets(kind, PrintMethod::Sheetwise, 36, &params);
        assert_eq!(first, second);
    }
}

#[test]
fn test_simplex_sheets_are_one_sided() {
    for kind in [
        ImpositionKind::SaddleStitch,
        ImpositionKind::PerfectBound,
        ImpositionKind::CutAndStack,
        ImpositionKind::NUp,
    ] {
        let sheets = compute_sheets(kind, PrintMethod::Simplex, 16, &LayoutParams::default());
        assert!(sheets.iter().all(|s| s.back.is_empty()), "{:?}", kind);
    }
}
