use crate::layout::LayoutParams;
use crate::types::*;

/// Which marks the renderer draws on each surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkOptions {
    /// Crop marks around each trimmed box
    pub crop_marks: bool,
    /// Registration crosses at the sheet corners and edge midpoints
    pub registration_marks: bool,
    /// CMYK color bar at the bottom of the sheet
    pub color_bar: bool,
    /// Collation staircase blocks for multi-signature work
    pub collation_marks: bool,
    /// Dashed fold line at the spine of bound layouts
    pub fold_line: bool,
    /// Descriptive slug line
    pub slug_line: bool,
}

impl Default for MarkOptions {
    fn default() -> Self {
        Self {
            crop_marks: true,
            registration_marks: true,
            color_bar: true,
            collation_marks: true,
            fold_line: true,
            slug_line: true,
        }
    }
}

/// Cover generation settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverOptions {
    /// Spine thickness in mm
    pub spine_mm: f32,
}

impl Default for CoverOptions {
    fn default() -> Self {
        Self { spine_mm: 5.0 }
    }
}

/// Complete configuration of one imposition job.
///
/// The engine is stateless; a job configuration plus a page count fully
/// determines the output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobOptions {
    pub imposition: ImpositionKind,
    pub print_method: PrintMethod,

    /// Pages per signature for perfect binding; anything that is not a
    /// positive multiple of 4 is silently treated as 16
    pub signature_size: usize,
    /// Grid shape for N-up
    pub columns: usize,
    pub rows: usize,

    pub format: SheetFormat,
    pub orientation: Orientation,

    /// Gap between items in mm; each trimmed box shrinks by half the gap
    /// on every side
    pub gap_mm: f32,
    /// Paper thickness per folded sheet for creep compensation; 0 = off
    pub creep_per_sheet_mm: f32,

    /// Generate a cover page ahead of the interior sheets
    pub cover: Option<CoverOptions>,

    pub marks: MarkOptions,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            imposition: ImpositionKind::SaddleStitch,
            print_method: PrintMethod::Sheetwise,
            signature_size: 16,
            columns: 2,
            rows: 1,
            format: SheetFormat::A3,
            orientation: Orientation::Landscape,
            gap_mm: 0.0,
            creep_per_sheet_mm: 0.0,
            cover: None,
            marks: MarkOptions::default(),
        }
    }
}

impl JobOptions {
    /// The layout parameters the strategies consume
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            signature_size: self.signature_size,
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Physical sheet size in mm with orientation applied
    pub fn sheet_dimensions_mm(&self) -> (f32, f32) {
        self.format.dimensions_with_orientation(self.orientation)
    }

    /// Whether the selected product folds around a central spine
    pub fn is_bound(&self) -> bool {
        matches!(
            self.imposition,
            ImpositionKind::SaddleStitch | ImpositionKind::PerfectBound
        )
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
