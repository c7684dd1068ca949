pub mod cover;
pub mod creep;
pub mod impose;
pub mod layout;
pub mod marks;

mod constants;
mod options;
mod render;
mod stats;
mod types;

pub use constants::{mm_to_pt, pt_to_mm};
pub use impose::{impose, impose_proof, load_pdf, save_pdf, sniff_page_count, sniff_page_count_file};
pub use layout::{LayoutParams, PageRef, Placement, Sheet, SurfaceSide, compute_sheets};
pub use marks::{MarkContext, SurfaceMarks, plan_surface_marks, trimmed_box_mm};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
