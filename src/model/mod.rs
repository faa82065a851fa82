//! # Flyer Model
//!
//! The input and output types of the pagination engine. Items are what the
//! designer's product list holds; pages are what the packer hands back.
//!
//! The model is deliberately small. A product card carries prices, images,
//! colors and a dozen styling knobs, but none of that matters for deciding
//! which page it lands on. The packer only needs to know how many columns
//! an item occupies, how many rows tall it is, and whether it is a section
//! divider.

use serde::{Deserialize, Serialize};

/// One entry of the flyer's ordered item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable identifier, unique within the list.
    pub id: String,

    /// What kind of item this is.
    pub kind: ItemKind,
}

/// The two things a flyer grid can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemKind {
    /// A product card. Highlights are products with a span above one.
    #[serde(rename_all = "camelCase")]
    Normal {
        /// Grid columns occupied. Capped to the grid width when packed.
        #[serde(default = "default_one")]
        column_span: u32,
        /// Multiplies the row height for intentionally tall cards.
        #[serde(default = "default_one")]
        row_multiplier: u32,
    },

    /// A full-width section break ("Meat Department"). Always alone in its
    /// row, always as wide as the grid.
    Divider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

fn default_one() -> u32 {
    1
}

impl Item {
    /// A regular one-column, one-row product.
    pub fn product(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Normal {
                column_span: 1,
                row_multiplier: 1,
            },
        }
    }

    /// A product spanning `span` columns.
    pub fn highlight(id: impl Into<String>, span: u32) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Normal {
                column_span: span,
                row_multiplier: 1,
            },
        }
    }

    /// An unlabeled section divider.
    pub fn divider(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Divider { label: None },
        }
    }

    /// Set the row multiplier. No effect on dividers.
    pub fn with_rows(mut self, rows: u32) -> Self {
        if let ItemKind::Normal { row_multiplier, .. } = &mut self.kind {
            *row_multiplier = rows;
        }
        self
    }

    pub fn is_divider(&self) -> bool {
        matches!(self.kind, ItemKind::Divider { .. })
    }

    /// Columns this item occupies in a grid of `columns` tracks.
    ///
    /// Dividers take the full width. Products are clamped to `[1, columns]`.
    pub fn span(&self, columns: u32) -> u32 {
        let columns = columns.max(1);
        match self.kind {
            ItemKind::Divider { .. } => columns,
            ItemKind::Normal { column_span, .. } => column_span.clamp(1, columns),
        }
    }

    /// Row multiplier, 1 for dividers.
    pub fn rows(&self) -> u32 {
        match self.kind {
            ItemKind::Divider { .. } => 1,
            ItemKind::Normal { row_multiplier, .. } => row_multiplier,
        }
    }
}

/// Paper formats offered by the designer, in pixels at export resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperFormat {
    /// Social feed post, 4:5.
    Feed,
    /// Tall feed post, 3:4.
    FeedStory,
    /// Full-screen story, 9:16.
    Story,
    #[default]
    A4,
    A3,
    Letter,
    Tabloid,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PaperFormat {
    /// Returns portrait (width, height) in pixels.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperFormat::Feed => (1080.0, 1350.0),
            PaperFormat::FeedStory => (1080.0, 1440.0),
            PaperFormat::Story => (1080.0, 1920.0),
            // 150 dpi print sizes
            PaperFormat::A4 => (1240.0, 1754.0),
            PaperFormat::A3 => (1754.0, 2480.0),
            PaperFormat::Letter => (1275.0, 1650.0),
            PaperFormat::Tabloid => (1650.0, 2550.0),
            PaperFormat::Custom { width, height } => (*width, *height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A packed row within a page, as the packer grouped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRow {
    /// Index into `Page::items` of the row's first item.
    pub first: usize,
    /// Number of items in the row.
    pub count: usize,
    /// Sum of effective spans. Never above the grid's column count.
    pub columns_used: u32,
    /// Rendered height of the row in pixels.
    pub height: f64,
    /// Whether this row is a section divider.
    pub divider: bool,
}

/// One fixed-size page container's worth of items.
///
/// Pages own clones of their items, so later edits to the caller's list
/// cannot reach into a page that has already been rendered or exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Item>,
    pub rows: Vec<PageRow>,
    /// Sum of row heights, including a trailing row that is not full.
    pub content_height: f64,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    /// Items of one packed row. Empty if the row does not describe a range
    /// of this page, as can happen with a hand-edited page.
    pub fn row_items(&self, row: &PageRow) -> &[Item] {
        row.first
            .checked_add(row.count)
            .and_then(|end| self.items.get(row.first..end))
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_clamped_to_grid() {
        assert_eq!(Item::highlight("a", 5).span(3), 3);
        assert_eq!(Item::highlight("a", 0).span(3), 1);
        assert_eq!(Item::highlight("a", 2).span(3), 2);
        assert_eq!(Item::product("a").span(4), 1);
    }

    #[test]
    fn divider_spans_full_width() {
        assert_eq!(Item::divider("d").span(4), 4);
        assert_eq!(Item::divider("d").with_rows(3).rows(), 1);
    }

    #[test]
    fn item_kind_json_shape() {
        let item: Item =
            serde_json::from_str(r#"{ "id": "1", "kind": { "type": "normal", "columnSpan": 2 } }"#)
                .unwrap();
        assert_eq!(item, Item::highlight("1", 2));

        let divider: Item = serde_json::from_str(
            r#"{ "id": "d", "kind": { "type": "divider", "label": "Açougue" } }"#,
        )
        .unwrap();
        assert!(divider.is_divider());
    }

    #[test]
    fn row_items_outside_page_is_empty() {
        let page = Page {
            items: vec![Item::product("a")],
            rows: vec![],
            content_height: 0.0,
        };
        let stray = PageRow {
            first: 0,
            count: 5,
            columns_used: 1,
            height: 100.0,
            divider: false,
        };
        assert!(page.row_items(&stray).is_empty());

        let overflowing = PageRow {
            first: usize::MAX,
            count: 2,
            ..stray
        };
        assert!(page.row_items(&overflowing).is_empty());

        let valid = PageRow { count: 1, ..stray };
        assert_eq!(page.row_items(&valid)[0].id, "a");
    }

    #[test]
    fn paper_format_names() {
        let format: PaperFormat = serde_json::from_str("\"feed-story\"").unwrap();
        assert_eq!(format, PaperFormat::FeedStory);
        let format: PaperFormat = serde_json::from_str("\"a4\"").unwrap();
        assert_eq!(format.dimensions(), (1240.0, 1754.0));
    }
}
