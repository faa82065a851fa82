//! # Break Decisions
//!
//! The two questions the packer asks before placing each item: does the
//! open row have to be closed first, and does the item still fit on this
//! page. Kept as small pure functions so the rules can be tested without
//! running a whole pagination pass.

/// What to do with an item given the space left on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// The item fits on the current page.
    Place,
    /// The item does not fit, but the page is empty. Place it anyway so it
    /// gets a page of its own instead of being dropped.
    PlaceOversized,
    /// Finalize the current page and place the item on a fresh one.
    MoveToNextPage,
}

/// Does the open row have to be closed before placing this item?
///
/// An empty row never needs closing. A divider always closes a non-empty
/// row, as does a span that would overflow the column budget.
pub fn needs_row_break(columns_used: u32, span: u32, columns: u32, is_divider: bool) -> bool {
    // Compared against the remaining budget so huge grids cannot overflow.
    columns_used > 0 && (is_divider || span > columns.saturating_sub(columns_used))
}

/// Decide whether an item of `item_height` fits below `height_used`.
pub fn decide_break(
    height_used: f64,
    item_height: f64,
    available_height: f64,
    page_is_empty: bool,
) -> BreakDecision {
    if height_used + item_height <= available_height {
        return BreakDecision::Place;
    }

    // Nothing to move away from: a fresh page takes the item regardless.
    if page_is_empty {
        return BreakDecision::PlaceOversized;
    }

    BreakDecision::MoveToNextPage
}
