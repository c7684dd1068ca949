use press_impose::*;

#[test]
fn test_defaults_match_documented_fallbacks() {
    let options = JobOptions::default();
    assert_eq!(options.imposition, ImpositionKind::SaddleStitch);
    assert_eq!(options.print_method, PrintMethod::Sheetwise);
    assert_eq!(options.signature_size, 16);
    assert_eq!(options.columns, 2);
    assert_eq!(options.rows, 1);
    assert_eq!(options.gap_mm, 0.0);
    assert_eq!(options.creep_per_sheet_mm, 0.0);
    assert!(options.cover.is_none());
}

#[test]
fn test_layout_params_mirror_options() {
    let options = JobOptions {
        signature_size: 32,
        columns: 3,
        rows: 4,
        ..Default::default()
    };
    let params = options.layout_params();
    assert_eq!(params.signature_size, 32);
    assert_eq!(params.columns, 3);
    assert_eq!(params.rows, 4);
}

#[test]
fn test_sheet_dimensions_follow_orientation() {
    let portrait = JobOptions {
        format: SheetFormat::A3,
        orientation: Orientation::Portrait,
        ..Default::default()
    };
    assert_eq!(portrait.sheet_dimensions_mm(), (297.0, 420.0));

    let landscape = JobOptions {
        orientation: Orientation::Landscape,
        ..portrait
    };
    assert_eq!(landscape.sheet_dimensions_mm(), (420.0, 297.0));
}

#[test]
fn test_custom_format() {
    let options = JobOptions {
        format: SheetFormat::Custom {
            width_mm: 200.0,
            height_mm: 300.0,
        },
        orientation: Orientation::Portrait,
        ..Default::default()
    };
    assert_eq!(options.sheet_dimensions_mm(), (200.0, 300.0));
}

#[test]
fn test_bound_kinds() {
    let mut options = JobOptions::default();
    assert!(options.is_bound());
    options.imposition = ImpositionKind::PerfectBound;
    assert!(options.is_bound());
    options.imposition = ImpositionKind::CutAndStack;
    assert!(!options.is_bound());
    options.imposition = ImpositionKind::NUp;
    assert!(!options.is_bound());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_json_round_trip() {
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.json");

    let options = JobOptions {
        imposition: ImpositionKind::PerfectBound,
        print_method: PrintMethod::Simplex,
        signature_size: 32,
        gap_mm: 4.0,
        creep_per_sheet_mm: 0.1,
        cover: Some(CoverOptions { spine_mm: 7.5 }),
        ..Default::default()
    };

    options.save(&path).await.unwrap();
    let loaded = JobOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    tokio::fs::write(&path, b"not json").await.unwrap();

    match JobOptions::load(&path).await {
        Err(ImposeError::Config(_)) => {}
        other => panic!("expected Config error, got {:?}", other.map(|_| ())),
    }
}
