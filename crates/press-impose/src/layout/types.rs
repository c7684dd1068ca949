//! Layout data types
//!
//! These types carry the result of the imposition calculation: which
//! logical page lands where on which physical sheet, plus the binding
//! metadata the creep and collation logic reads back per sheet.

/// A logical page slot: either a 1-based document page or a padding blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef {
    Page(usize),
    Blank,
}

impl PageRef {
    /// The 1-based page number, or None for a blank
    pub fn number(self) -> Option<usize> {
        match self {
            PageRef::Page(n) => Some(n),
            PageRef::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        self == PageRef::Blank
    }
}

/// Which printed surface of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSide {
    Front,
    Back,
}

impl SurfaceSide {
    pub fn label(self) -> &'static str {
        match self {
            SurfaceSide::Front => "front",
            SurfaceSide::Back => "back",
        }
    }
}

/// One page placed on a surface.
///
/// `x`, `y`, `width`, `height` are fractions of the full sheet surface
/// (0.0–1.0), origin at the top-left, so the layout stays independent of
/// the physical sheet format. Invariant: `x + width <= 1.0` and
/// `y + height <= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page: PageRef,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees (0 or 180)
    pub rotation: f32,
}

impl Placement {
    pub fn new(page: PageRef, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            page,
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// A half-sheet leaf at the given horizontal fraction (folded work)
    pub(crate) fn half(page: PageRef, x: f32) -> Self {
        Self::new(page, x, 0.0, 0.5, 1.0)
    }
}

/// One physical sheet: the placements on each surface plus binding
/// metadata.
///
/// An empty `back` means a one-sided surface. Layouts that do not bind
/// into signatures carry the implicit single-signature defaults
/// (`0, 1, 0, 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub front: Vec<Placement>,
    pub back: Vec<Placement>,
    /// Position within its signature, 0 = outermost
    pub sheet_index: usize,
    pub sheets_in_signature: usize,
    pub signature_index: usize,
    pub total_signatures: usize,
}

impl Sheet {
    /// A sheet outside any signature structure (cut-and-stack, N-up)
    pub fn unbound(front: Vec<Placement>, back: Vec<Placement>) -> Self {
        Self {
            front,
            back,
            sheet_index: 0,
            sheets_in_signature: 1,
            signature_index: 0,
            total_signatures: 1,
        }
    }

    /// A sheet nested at `sheet_index` inside a quire of
    /// `sheets_in_signature` sheets
    pub fn in_quire(
        front: Vec<Placement>,
        back: Vec<Placement>,
        sheet_index: usize,
        sheets_in_signature: usize,
    ) -> Self {
        Self {
            front,
            back,
            sheet_index,
            sheets_in_signature,
            signature_index: 0,
            total_signatures: 1,
        }
    }

    pub fn is_two_sided(&self) -> bool {
        !self.back.is_empty()
    }

    /// The surfaces to print, front first, skipping an empty back
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceSide, &[Placement])> {
        let back = if self.back.is_empty() {
            None
        } else {
            Some((SurfaceSide::Back, self.back.as_slice()))
        };
        std::iter::once((SurfaceSide::Front, self.front.as_slice())).chain(back)
    }

    /// All non-blank page numbers on this sheet, front then back
    pub fn page_numbers(&self) -> Vec<usize> {
        self.front
            .iter()
            .chain(self.back.iter())
            .filter_map(|item| item.page.number())
            .collect()
    }
}
