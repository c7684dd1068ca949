//! Shared constants for imposition and mark drawing
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Layout Defaults
// =============================================================================

/// Default pages per signature for perfect binding
pub const DEFAULT_SIGNATURE_SIZE: usize = 16;

/// Default grid columns for N-up work
pub const DEFAULT_GRID_COLUMNS: usize = 2;

/// Default grid rows for N-up work
pub const DEFAULT_GRID_ROWS: usize = 1;

// =============================================================================
// Creep Compensation
// =============================================================================

/// Items whose left edge fraction is below this sit left of the gutter
pub const GUTTER_BAND_LOW: f32 = 0.49;

/// Items whose left edge fraction is above this sit right of the gutter
pub const GUTTER_BAND_HIGH: f32 = 0.51;

// =============================================================================
// Printer's Marks (all lengths in mm on the physical sheet)
// =============================================================================

/// Tolerance when classifying an item edge as lying on the surface boundary
pub const EDGE_TOLERANCE: f32 = 1e-4;

/// Length of crop mark strokes
pub const CROP_MARK_LENGTH_MM: f32 = 5.0;

/// Stand-off between a trimmed box and the start of its crop marks
pub const CROP_MARK_OFFSET_MM: f32 = 2.0;

/// Line width for crop marks
pub const CROP_MARK_LINE_MM: f32 = 0.1;

/// Arm length of a registration cross (full size, centered)
pub const REGISTRATION_MARK_SIZE_MM: f32 = 5.0;

/// Line width for registration crosses and fold lines
pub const REGISTRATION_MARK_LINE_MM: f32 = 0.2;

/// Distance of registration marks from the sheet edges
pub const SHEET_MARK_MARGIN_MM: f32 = 5.0;

/// Side length of one CMYK color-bar patch
pub const COLOR_BAR_PATCH_MM: f32 = 5.0;

/// Clearance between the color bar and the bottom registration marks
pub const COLOR_BAR_CLEARANCE_MM: f32 = 2.0;

/// Width of the collation staircase block at the spine
pub const COLLATION_MARK_WIDTH_MM: f32 = 3.0;

/// Collation marks stair-step inside this vertical band of the sheet
pub const COLLATION_BAND_TOP: f32 = 0.2;
pub const COLLATION_BAND_BOTTOM: f32 = 0.8;

// =============================================================================
// Text
// =============================================================================

/// Font size for the slug line (points)
pub const SLUG_FONT_SIZE_PT: f32 = 6.0;

/// Font size for placeholder page numbers in proof output (points)
pub const PLACEHOLDER_FONT_SIZE_PT: f32 = 24.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;
