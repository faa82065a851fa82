//! # Page Grid
//!
//! Turns a packed page into grid placements for the rendering side: which
//! column tracks each item occupies, in which row, and where that lands in
//! pixels. Supports:
//! - Equal-width tracks with a column gap
//! - Column spans (highlights) and full-width dividers
//! - Row indices taken from the packer's own row grouping, so the renderer
//!   never re-derives wraps on its own

use serde::Serialize;

use crate::model::Page;

/// Resolved placement of one item on a page grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItemPlacement {
    /// Index into `Page::items`.
    pub item_index: usize,
    /// Column start (0-based).
    pub col_start: usize,
    /// Column end (exclusive, 0-based).
    pub col_end: usize,
    /// Row (0-based) within the page.
    pub row: usize,
    /// Left edge relative to the content area.
    pub x: f64,
    /// Top edge relative to the content area.
    pub y: f64,
    pub width: f64,
    /// Height of the row slot, gap below the card included.
    pub height: f64,
}

/// Equal-width column tracks of a content area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTracks {
    pub track_width: f64,
    pub gap: f64,
}

impl GridTracks {
    /// Split `content_width` into `columns` equal tracks after gaps.
    pub fn resolve(content_width: f64, columns: u32, gap: f64) -> Self {
        let columns = f64::from(columns.max(1));
        let track_width = ((content_width - gap * (columns - 1.0)) / columns).max(0.0);
        Self { track_width, gap }
    }

    /// Left edge of column `col`.
    pub fn x_offset(&self, col: usize) -> f64 {
        col as f64 * (self.track_width + self.gap)
    }

    /// Width of columns `col_start..col_end`, covered gaps included.
    pub fn span_width(&self, col_start: usize, col_end: usize) -> f64 {
        match col_end.saturating_sub(col_start) {
            0 => 0.0,
            n => n as f64 * self.track_width + (n - 1) as f64 * self.gap,
        }
    }
}

/// Place a page's items left to right within each packed row.
pub fn place_page(page: &Page, columns: u32, tracks: &GridTracks) -> Vec<GridItemPlacement> {
    let columns = columns.max(1);
    let mut result = Vec::with_capacity(page.len());

    for ((row_index, row), y) in page.rows.iter().enumerate().zip(row_y_offsets(page)) {
        let mut col = 0;
        for (offset, item) in page.row_items(row).iter().enumerate() {
            let span = item.span(columns) as usize;
            result.push(GridItemPlacement {
                item_index: row.first + offset,
                col_start: col,
                col_end: col + span,
                row: row_index,
                x: tracks.x_offset(col),
                y,
                width: tracks.span_width(col, col + span),
                height: row.height,
            });
            col += span;
        }
    }

    result
}

/// Vertical offset of each row, stacking row heights from the page top.
pub fn row_y_offsets(page: &Page) -> Vec<f64> {
    page.rows
        .iter()
        .scan(0.0, |y, row| {
            let top = *y;
            *y += row.height;
            Some(top)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate::paginate;
    use crate::model::Item;

    fn tracks() -> GridTracks {
        // 3 × 100 + 2 × 10
        GridTracks::resolve(320.0, 3, 10.0)
    }

    #[test]
    fn test_place_page_auto() {
        // 6 items, 3 columns → 2 rows
        let items: Vec<Item> = (0..6).map(|i| Item::product(i.to_string())).collect();
        let pages = paginate(&items, 1000.0, 100.0, 3);
        let result = place_page(&pages[0], 3, &tracks());
        assert_eq!(result.len(), 6);

        assert_eq!((result[0].col_start, result[0].row), (0, 0));
        assert_eq!((result[1].col_start, result[1].row), (1, 0));
        assert_eq!((result[2].col_start, result[2].row), (2, 0));
        assert_eq!((result[3].col_start, result[3].row), (0, 1));
        assert_eq!((result[5].col_start, result[5].row), (2, 1));

        assert!((result[2].x - 220.0).abs() < 0.001);
        assert!((result[4].y - 100.0).abs() < 0.001);
        assert!((result[4].width - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_place_page_spanning() {
        let items = vec![
            Item::highlight("h", 2),
            Item::product("a"),
            Item::divider("d"),
            Item::product("b"),
        ];
        let pages = paginate(&items, 1000.0, 100.0, 3);
        let result = place_page(&pages[0], 3, &tracks());

        assert_eq!((result[0].col_start, result[0].col_end), (0, 2));
        assert!((result[0].width - 210.0).abs() < 0.001);
        assert_eq!((result[1].col_start, result[1].col_end), (2, 3));
        assert!((result[1].x - 220.0).abs() < 0.001);

        let divider = &result[2];
        assert_eq!((divider.col_start, divider.col_end, divider.row), (0, 3, 1));
        assert!((divider.width - 320.0).abs() < 0.001);
        assert!((divider.height - 80.0).abs() < 0.001);

        assert_eq!((result[3].col_start, result[3].row), (0, 2));
        assert!((result[3].y - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_place_empty_page() {
        assert!(place_page(&Page::default(), 3, &tracks()).is_empty());
    }

    #[test]
    fn tracks_share_width_after_gaps() {
        let tracks = GridTracks::resolve(210.0, 2, 10.0);
        assert!((tracks.track_width - 100.0).abs() < 0.001);
        assert!((tracks.x_offset(1) - 110.0).abs() < 0.001);
        assert!((tracks.span_width(0, 2) - 210.0).abs() < 0.001);
        assert_eq!(tracks.span_width(1, 1), 0.0);
    }

    #[test]
    fn tracks_never_go_negative() {
        let tracks = GridTracks::resolve(10.0, 4, 16.0);
        assert_eq!(tracks.track_width, 0.0);
        let single = GridTracks::resolve(500.0, 0, 16.0);
        assert!((single.track_width - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_row_y_offsets() {
        let items = vec![Item::product("a"), Item::divider("d"), Item::product("b")];
        let pages = paginate(&items, 1000.0, 100.0, 3);
        assert_eq!(row_y_offsets(&pages[0]), vec![0.0, 100.0, 180.0]);
    }
}
