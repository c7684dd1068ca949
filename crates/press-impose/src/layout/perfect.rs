//! Perfect-bound imposition
//!
//! A glued book block is a run of fixed-size signatures, each folded like
//! a small saddle-stitched booklet. This module chunks the page list and
//! delegates every chunk to the saddle strategy, then stamps each sheet
//! with its signature position so creep and collation marking can tell
//! the signatures apart.

use crate::constants::DEFAULT_SIGNATURE_SIZE;
use crate::types::PrintMethod;

use super::sequence::pad_to_multiple;
use super::{PageRef, Sheet, saddle};

/// Lay out a page list as consecutive saddle-folded signatures.
///
/// A `signature_size` that is not a positive multiple of 4 is silently
/// corrected to the default; a bad chunk size is a recoverable
/// configuration mistake, not an error.
pub(crate) fn compute(
    pages: &[PageRef],
    method: PrintMethod,
    signature_size: usize,
) -> Vec<Sheet> {
    let signature_size = if signature_size == 0 || signature_size % 4 != 0 {
        DEFAULT_SIGNATURE_SIZE
    } else {
        signature_size
    };

    if pages.is_empty() {
        return Vec::new();
    }

    let pages = pad_to_multiple(pages.to_vec(), 4);
    let pages = pad_to_multiple(pages, signature_size);

    let total_signatures = pages.len() / signature_size;
    let mut sheets = Vec::new();

    for (signature_index, chunk) in pages.chunks(signature_size).enumerate() {
        let mut quire = saddle::compute(chunk, method);
        for sheet in &mut quire {
            sheet.signature_index = signature_index;
            sheet.total_signatures = total_signatures;
        }
        sheets.extend(quire);
    }

    sheets
}
