//! PDF rendering for imposed sheets
//!
//! This module handles all PDF-specific operations:
//! - Wrapping source pages as Form XObjects
//! - Building output pages per printed surface
//! - Drawing the planned marks and the optional cover

mod sheet;
mod xobject;

pub(crate) use sheet::{SurfaceContent, render_cover, render_surface};
pub use xobject::{deep_copy_object, page_dimensions_pt, page_xobject};
