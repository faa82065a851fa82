//! # Item Paginator
//!
//! A greedy row-then-page packer. Items are laid out in list order, left
//! to right, wrapping into a new row when the column budget runs out and
//! into a new page when the next item would push past the available
//! height. One forward pass, no look-ahead, no reordering: the same input
//! always produces the same pages.
//!
//! ## Row height accounting
//!
//! A row's height is committed to the page's running total only when the
//! row is closed: when it becomes exactly full, when the next item wraps,
//! or when a divider arrives. A partially filled row stays open and its
//! height is not part of the committed total. The break check compares
//! the committed total plus the height the open row would have with the
//! new item in it, so a row that already holds an oversized card takes no
//! neighbours. Pages report their rendered height, open row included, in
//! `Page::content_height`.

use std::collections::HashSet;

use log::{debug, trace};

use super::capacity::LayoutConstants;
use super::page_break::{self, BreakDecision};
use crate::error::FlyerError;
use crate::model::{Item, Page, PageRow};

/// Packing parameters for one pagination pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paginator {
    /// Vertical space per page, from the capacity calculator.
    pub available_height: f64,
    /// Card height plus the gap between rows.
    pub row_height: f64,
    /// Number of grid tracks.
    pub columns: u32,
    /// Fixed height of a divider row.
    pub divider_height: f64,
}

impl Paginator {
    pub fn new(available_height: f64, row_height: f64, columns: u32) -> Self {
        Self {
            available_height,
            row_height,
            columns,
            divider_height: LayoutConstants::default().divider_height,
        }
    }

    pub fn with_divider_height(mut self, divider_height: f64) -> Self {
        self.divider_height = divider_height;
        self
    }

    /// Check the preconditions `paginate` does not defend against.
    pub fn validate(&self, items: &[Item]) -> Result<(), FlyerError> {
        if !self.row_height.is_finite() || self.row_height < 0.0 {
            return Err(FlyerError::InvalidRowHeight(self.row_height));
        }
        validate_items(items, self.columns)
    }

    /// Validate, then paginate.
    pub fn try_paginate(&self, items: &[Item]) -> Result<Vec<Page>, FlyerError> {
        self.validate(items)?;
        Ok(self.paginate(items))
    }

    /// Partition `items` into pages. Never fails.
    ///
    /// Always returns at least one page; an empty list yields a single
    /// empty page. A column count of zero is treated as one.
    pub fn paginate(&self, items: &[Item]) -> Vec<Page> {
        let columns = self.columns.max(1);
        let mut pages = Vec::new();
        let mut current = PageBuilder::default();

        for item in items {
            let span = item.span(columns);
            let item_height = self.item_height(item);

            if page_break::needs_row_break(
                current.row.columns_used,
                span,
                columns,
                item.is_divider(),
            ) {
                current.close_row();
            }

            match page_break::decide_break(
                current.height_used,
                current.row.height.max(item_height),
                self.available_height,
                current.is_empty(),
            ) {
                BreakDecision::Place => {}
                BreakDecision::PlaceOversized => {
                    debug!(
                        "item '{}' ({}px) exceeds page capacity {}px; placing it alone",
                        item.id, item_height, self.available_height
                    );
                }
                BreakDecision::MoveToNextPage => {
                    debug!(
                        "page {} full at {}px; '{}' starts a new page",
                        pages.len() + 1,
                        current.height_used,
                        item.id
                    );
                    pages.push(std::mem::take(&mut current).finish());
                }
            }

            current.place(item, span, item_height);
            trace!(
                "placed '{}' on page {} (span {}, {} of {} columns used)",
                item.id,
                pages.len() + 1,
                span,
                current.row.columns_used,
                columns
            );

            if item.is_divider() || current.row.columns_used == columns {
                current.close_row();
            }
        }

        if !current.is_empty() {
            pages.push(current.finish());
        }
        if pages.is_empty() {
            pages.push(Page::default());
        }

        debug!("paginated {} items into {} pages", items.len(), pages.len());
        pages
    }

    fn item_height(&self, item: &Item) -> f64 {
        if item.is_divider() {
            self.divider_height
        } else {
            self.row_height * f64::from(item.rows())
        }
    }
}

/// Paginate with the default divider height.
pub fn paginate(items: &[Item], available_height: f64, row_height: f64, columns: u32) -> Vec<Page> {
    Paginator::new(available_height, row_height, columns).paginate(items)
}

/// Boundary checks for item lists: at least one column, row multipliers of
/// at least one, unique ids.
pub fn validate_items(items: &[Item], columns: u32) -> Result<(), FlyerError> {
    if columns < 1 {
        return Err(FlyerError::InvalidColumns(columns));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.rows() < 1 {
            return Err(FlyerError::InvalidRowMultiplier {
                id: item.id.clone(),
                value: item.rows(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(FlyerError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// The row currently being filled.
#[derive(Debug, Default)]
struct OpenRow {
    first: usize,
    count: usize,
    columns_used: u32,
    height: f64,
    divider: bool,
}

/// Accumulates one page while the packer walks the item list.
#[derive(Debug, Default)]
struct PageBuilder {
    items: Vec<Item>,
    rows: Vec<PageRow>,
    /// Height of closed rows only.
    height_used: f64,
    row: OpenRow,
}

impl PageBuilder {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn place(&mut self, item: &Item, span: u32, height: f64) {
        if self.row.count == 0 {
            self.row.first = self.items.len();
        }
        self.items.push(item.clone());
        self.row.count += 1;
        self.row.columns_used += span;
        self.row.height = self.row.height.max(height);
        self.row.divider = item.is_divider();
    }

    /// Commit the open row's height. No-op for an empty row.
    fn close_row(&mut self) {
        if self.row.count == 0 {
            return;
        }
        let row = std::mem::take(&mut self.row);
        self.height_used += row.height;
        self.rows.push(PageRow {
            first: row.first,
            count: row.count,
            columns_used: row.columns_used,
            height: row.height,
            divider: row.divider,
        });
    }

    fn finish(mut self) -> Page {
        self.close_row();
        Page {
            items: self.items,
            rows: self.rows,
            content_height: self.height_used,
        }
    }
}
