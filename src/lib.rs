//! # Flyer Layout
//!
//! Page-native pagination for promotional flyers.
//!
//! A flyer is a grid of product cards broken up by section dividers and
//! framed by a header and footer band on every page. Deciding where one
//! page ends and the next begins is the only part of a flyer designer with
//! real invariants: every product on exactly one page, in list order, no
//! row wider than the grid, no page taller than its capacity unless a
//! single card is taller than the page itself.
//!
//! ## Architecture
//!
//! ```text
//! Layout document (JSON)
//!       ↓
//!   [document]          — saved flyer state → items, geometry, row height
//!       ↓
//!   [layout::capacity]  — page height minus header, footer, padding
//!       ↓
//!   [layout::paginate]  — greedy row-then-page packer
//!       ↓
//!   [layout::grid]      — column/row placements per page
//!       ↓
//!   LayoutPlan          — handed to render and export
//! ```

pub mod document;
pub mod error;
pub mod layout;
pub mod model;

pub use error::FlyerError;

use document::FlyerDocument;
use layout::{LayoutEngine, LayoutPlan};

/// Lay out a document with the default layout constants.
///
/// This is the primary entry point. Validates the product list and returns
/// the page plan a renderer or exporter iterates.
pub fn plan(document: &FlyerDocument) -> Result<LayoutPlan, FlyerError> {
    LayoutEngine::new().layout(document)
}

/// Lay out a document described as JSON.
pub fn plan_json(json: &str) -> Result<LayoutPlan, FlyerError> {
    let document = FlyerDocument::from_json(json)?;
    plan(&document)
}
