use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Product types, one per layout strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpositionKind {
    /// Folded booklet, stapled through the spine
    #[default]
    SaddleStitch,
    /// Glued book block built from fixed-size signatures
    PerfectBound,
    /// One large stack cut into piles that interleave back into order
    CutAndStack,
    /// Plain grid of consecutive pages, duplex backs mirrored
    NUp,
}

/// How the press puts ink on the two sides of a sheet.
///
/// Work-and-turn and work-and-tumble share sheetwise page geometry here;
/// the turning direction is a press-side instruction, not a different
/// arrangement of pages on the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintMethod {
    /// Separate plates for front and back
    #[default]
    Sheetwise,
    /// One plate, sheet turned side over side
    WorkAndTurn,
    /// One plate, sheet turned head over foot
    WorkAndTumble,
    /// Single-sided printing
    Simplex,
}

impl PrintMethod {
    /// True for every method that prints both sides of a sheet
    pub fn is_duplex(self) -> bool {
        self != PrintMethod::Simplex
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Press sheet formats
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetFormat {
    A4,
    A3,
    A2,
    Sra3,
    B1,
    B2,
    B3,
    Ra1,
    Custom { width_mm: f32, height_mm: f32 },
}

impl SheetFormat {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            SheetFormat::A4 => (210.0, 297.0),
            SheetFormat::A3 => (297.0, 420.0),
            SheetFormat::A2 => (420.0, 594.0),
            SheetFormat::Sra3 => (320.0, 450.0),
            SheetFormat::B1 => (700.0, 1000.0),
            SheetFormat::B2 => (500.0, 707.0),
            SheetFormat::B3 => (353.0, 500.0),
            SheetFormat::Ra1 => (610.0, 860.0),
            SheetFormat::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Statistics about an imposition job
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of physical sheets produced
    pub sheets: usize,
    /// Number of printed surfaces (a duplex sheet has two)
    pub surfaces: usize,
    /// Blank slots introduced by padding
    pub blank_slots: usize,
    /// Number of signatures, for bound work
    pub signatures: Option<usize>,
}
