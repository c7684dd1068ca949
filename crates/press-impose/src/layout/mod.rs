//! Layout calculation for imposition
//!
//! This module maps an ordered run of document pages onto physical press
//! sheets. Each product type has its own strategy:
//! - saddle-stitch: convergent pairing onto folded sheets
//! - perfect-bound: fixed-size signatures, each folded like a booklet
//! - cut-and-stack: two piles cut apart and recombined
//! - N-up: plain grid tiling with mirrored duplex backs
//!
//! The calculation is pure: the same configuration always produces the
//! same sheet list, and no state survives between calls.

mod cut_stack;
mod grid;
mod perfect;
mod saddle;
mod sequence;
mod types;

pub use sequence::{pad_to_multiple, page_run};
pub use types::*;

use crate::constants::{DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_SIGNATURE_SIZE};
use crate::types::{ImpositionKind, PrintMethod};

/// Product-specific layout parameters.
///
/// Only the fields the selected strategy reads are consulted; the rest
/// keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    /// Pages per signature for perfect binding (multiple of 4)
    pub signature_size: usize,
    /// Grid columns for N-up
    pub columns: usize,
    /// Grid rows for N-up
    pub rows: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            signature_size: DEFAULT_SIGNATURE_SIZE,
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
        }
    }
}

/// Calculate the full sheet list for a job.
///
/// `total_pages == 0` yields an empty list; callers treat that as
/// "nothing to do". Every page `1..=total_pages` appears in exactly one
/// placement across the result, whichever strategy runs.
pub fn compute_sheets(
    kind: ImpositionKind,
    method: PrintMethod,
    total_pages: usize,
    params: &LayoutParams,
) -> Vec<Sheet> {
    let pages = page_run(total_pages);
    if pages.is_empty() {
        return Vec::new();
    }

    match kind {
        ImpositionKind::SaddleStitch => saddle::compute(&pages, method),
        ImpositionKind::PerfectBound => perfect::compute(&pages, method, params.signature_size),
        ImpositionKind::CutAndStack => cut_stack::compute(&pages, method),
        ImpositionKind::NUp => grid::compute(&pages, method, params.columns, params.rows),
    }
}
