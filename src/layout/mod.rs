//! # Page-Aware Flyer Layout
//!
//! Decides which products go on which page of a flyer and how tall each
//! page's content is.
//!
//! The flyer is a grid of fixed-height cards. There is no infinite canvas
//! that gets sliced afterwards: each page is opened with a known capacity,
//! and the packer asks "does this fit?" before every item.
//!
//! 1. [`capacity`] reserves the header band, the footer band and padding,
//!    and reports what is left of the page height
//! 2. [`paginate`] walks the items in order, filling rows left to right and
//!    pages top to bottom, consulting [`page_break`] at every step
//! 3. [`grid`] turns each packed page into column/row placements for the
//!    renderer
//!
//! The whole pass is pure. Inputs are borrowed, pages are freshly owned,
//! and identical inputs always produce identical pages.

pub mod cache;
pub mod capacity;
pub mod grid;
pub mod page_break;
pub mod paginate;

use log::info;
use serde::Serialize;

use crate::document::FlyerDocument;
use crate::error::FlyerError;
use crate::model::Page;
use capacity::{compute_available_height, content_width, page_size, LayoutConstants};
use grid::{GridItemPlacement, GridTracks};
use paginate::Paginator;

/// Everything a render or export collaborator needs: page container size,
/// the grid settings, and the computed pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub page_width: f64,
    pub page_height: f64,
    pub available_height: f64,
    pub content_width: f64,
    pub row_height: f64,
    pub columns: u32,
    pub tracks: GridTracks,
    pub pages: Vec<PageInfo>,
}

impl LayoutPlan {
    /// Number of pages an export will produce.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// One computed page plus its grid placements.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(flatten)]
    pub page: Page,
    pub placements: Vec<GridItemPlacement>,
}

/// Runs capacity + pagination + grid placement for a layout document.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    /// Used when the document does not carry its own constants.
    pub constants: LayoutConstants,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: LayoutConstants) -> Self {
        Self { constants }
    }

    pub fn layout(&self, document: &FlyerDocument) -> Result<LayoutPlan, FlyerError> {
        let constants = document.layout_constants.unwrap_or(self.constants);
        let geometry = document.geometry();
        let (page_width, page_height) = page_size(&geometry);
        let available_height = compute_available_height(&geometry, &constants);
        let content_width = content_width(&geometry, &constants);
        let tracks = GridTracks::resolve(content_width, document.columns, constants.column_gap);
        let row_height = document.row_height();
        let items = document.items();

        let paginator = Paginator::new(available_height, row_height, document.columns)
            .with_divider_height(constants.divider_height);
        let pages = paginator.try_paginate(&items)?;

        info!(
            "{} items on {} pages ({}x{}px, {}px available, {} columns)",
            items.len(),
            pages.len(),
            page_width,
            page_height,
            available_height,
            document.columns
        );

        let pages = pages
            .into_iter()
            .map(|page| {
                let placements = grid::place_page(&page, document.columns, &tracks);
                PageInfo { page, placements }
            })
            .collect();

        Ok(LayoutPlan {
            page_width,
            page_height,
            available_height,
            content_width,
            row_height,
            columns: document.columns,
            tracks,
            pages,
        })
    }
}
