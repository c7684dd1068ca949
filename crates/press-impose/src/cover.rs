//! Cover and spine dimension math
//!
//! A wraparound cover spans the back board, the spine and the front
//! board: twice the net page width plus the spine thickness. The spine
//! itself is estimated from the interior page count and the bulk of the
//! chosen paper stock, one leaf per two pages.

/// Physical size of a wraparound cover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverDimensions {
    pub width_mm: f32,
    pub height_mm: f32,
    pub spine_mm: f32,
}

/// Cover size from the net page size and a spine thickness.
///
/// The net page is half the interior sheet: `sheet width / 2` by the
/// sheet height.
pub fn cover_dimensions(net_width_mm: f32, net_height_mm: f32, spine_mm: f32) -> CoverDimensions {
    CoverDimensions {
        width_mm: 2.0 * net_width_mm + spine_mm,
        height_mm: net_height_mm,
        spine_mm,
    }
}

/// Common interior paper stocks with their thickness per leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperStock {
    /// Offset 80g, the workhorse
    Offset80,
    Offset90,
    /// Coated 115g, matte or gloss
    Coated115,
    Coated130,
    Coated150,
    /// Cream 70g, bulk 2.0
    Cream70,
    /// Cream 80g, bulk 1.5
    Cream80,
    MunkenCream90,
    MunkenWhite90,
    /// Bulky book paper 60g, bulk 2.0
    Bulky60,
}

impl PaperStock {
    /// Thickness of one leaf (two pages) in mm
    pub fn leaf_thickness_mm(self) -> f32 {
        match self {
            PaperStock::Offset80 => 0.100,
            PaperStock::Offset90 => 0.110,
            PaperStock::Coated115 => 0.090,
            PaperStock::Coated130 => 0.105,
            PaperStock::Coated150 => 0.120,
            PaperStock::Cream70 => 0.140,
            PaperStock::Cream80 => 0.120,
            PaperStock::MunkenCream90 => 0.135,
            PaperStock::MunkenWhite90 => 0.135,
            PaperStock::Bulky60 => 0.120,
        }
    }
}

/// Estimated spine width for an interior of `page_count` pages.
pub fn spine_width_mm(page_count: usize, stock: PaperStock) -> f32 {
    (page_count as f32 / 2.0) * stock.leaf_thickness_mm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_dimensions() {
        let cover = cover_dimensions(148.5, 210.0, 5.0);
        assert_eq!(cover.width_mm, 302.0);
        assert_eq!(cover.height_mm, 210.0);
        assert_eq!(cover.spine_mm, 5.0);
    }

    #[test]
    fn test_spine_width() {
        // 100 pages of standard offset: 50 leaves at 0.1mm
        let spine = spine_width_mm(100, PaperStock::Offset80);
        assert!((spine - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_bulkier_stock_thicker_spine() {
        let offset = spine_width_mm(200, PaperStock::Offset80);
        let cream = spine_width_mm(200, PaperStock::Cream70);
        assert!(cream > offset);
    }
}
