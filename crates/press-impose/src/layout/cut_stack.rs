//! Cut-and-stack imposition
//!
//! Two-up work where the printed pile is cut in half and the two piles
//! are stacked into final order. The page list splits into a first-half
//! stack and a second-half stack; each sheet carries one page from each
//! stack side by side.
//!
//! ```text
//! 8 pages, duplex:   stacks [1 2 3 4] and [5 6 7 8]
//!
//! Sheet 0 front: [1 | 5]    back: [6 | 2]
//! Sheet 1 front: [3 | 7]    back: [8 | 4]
//! ```
//!
//! The back pair swaps left and right so that, once the sheet flips over,
//! page `i+1` sits directly behind page `i` in each pile.

use crate::types::PrintMethod;

use super::sequence::pad_to_multiple;
use super::{PageRef, Placement, Sheet};

pub(crate) fn compute(pages: &[PageRef], method: PrintMethod) -> Vec<Sheet> {
    if pages.is_empty() {
        return Vec::new();
    }

    let pages = pad_to_multiple(pages.to_vec(), 2);
    let half = pages.len() / 2;
    let (stack_1, stack_2) = pages.split_at(half);

    let step = if method.is_duplex() { 2 } else { 1 };
    let mut sheets = Vec::with_capacity(half / step + 1);

    let mut i = 0;
    while i < half {
        let front = vec![
            Placement::half(stack_1[i], 0.0),
            Placement::half(stack_2[i], 0.5),
        ];

        // A back pair past the stack boundary is dropped, not an error
        let back = if method.is_duplex() && i + 1 < half {
            vec![
                Placement::half(stack_2[i + 1], 0.0),
                Placement::half(stack_1[i + 1], 0.5),
            ]
        } else {
            Vec::new()
        };

        sheets.push(Sheet::unbound(front, back));
        i += step;
    }

    sheets
}
