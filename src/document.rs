//! # Layout Document
//!
//! The flyer designer persists its whole state as one JSON object. Most of
//! it is styling; this module reads the handful of fields that decide
//! pagination and turns them into paginator inputs. Unknown fields are
//! ignored, so a full saved state deserializes as-is.

use serde::{Deserialize, Serialize};

use crate::error::FlyerError;
use crate::layout::capacity::{LayoutConstants, PageGeometry};
use crate::model::{Item, ItemKind, Orientation, PaperFormat};

/// The pagination-relevant slice of a saved flyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerDocument {
    #[serde(default)]
    pub paper_size: PaperFormat,

    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default = "default_columns")]
    pub columns: u32,

    #[serde(default)]
    pub layout: CardLayout,

    #[serde(default)]
    pub products: Vec<ProductEntry>,

    #[serde(default)]
    pub header: HeaderSettings,

    #[serde(default)]
    pub footer: FooterSettings,

    /// Overrides for the header/footer/divider reserves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_constants: Option<LayoutConstants>,
}

fn default_columns() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

/// Card sizing. A grid row is one card plus the gap below it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLayout {
    #[serde(default = "default_card_height")]
    pub card_height: f64,
    #[serde(default = "default_row_gap")]
    pub row_gap: f64,
}

fn default_card_height() -> f64 {
    280.0
}

fn default_row_gap() -> f64 {
    16.0
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            card_height: default_card_height(),
            row_gap: default_row_gap(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Product,
    Divider,
}

/// A saved product card or section divider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Column span. Missing means two for highlights, one otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    /// Row multiplier. Missing means one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default)]
    pub is_highlight: bool,
}

impl ProductEntry {
    pub fn to_item(&self) -> Item {
        let kind = match self.kind {
            Some(ProductType::Divider) => ItemKind::Divider {
                label: self.name.clone(),
            },
            _ => ItemKind::Normal {
                column_span: self.cols.unwrap_or(if self.is_highlight { 2 } else { 1 }),
                row_multiplier: self.rows.unwrap_or(1),
            },
        };
        Item {
            id: self.id.clone(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSettings {
    #[serde(default = "default_true")]
    pub show: bool,
    /// Full-bleed header art replacing the templated band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            show: true,
            custom_image: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSettings {
    #[serde(default = "default_true")]
    pub show_footer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            show_footer: true,
            custom_image: None,
        }
    }
}

fn has_art(image: &Option<String>) -> bool {
    image.as_deref().is_some_and(|src| !src.trim().is_empty())
}

impl FlyerDocument {
    pub fn from_json(json: &str) -> Result<Self, FlyerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Paginator items, in product-list order.
    pub fn items(&self) -> Vec<Item> {
        self.products.iter().map(ProductEntry::to_item).collect()
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            format: self.paper_size,
            orientation: self.orientation,
            header_is_custom_art: has_art(&self.header.custom_image),
            footer_is_custom_art: has_art(&self.footer.custom_image),
            show_header: self.header.show,
            show_footer: self.footer.show_footer,
        }
    }

    pub fn row_height(&self) -> f64 {
        self.layout.card_height + self.layout.row_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_uses_defaults() {
        let doc = FlyerDocument::from_json("{}").unwrap();
        assert_eq!(doc.paper_size, PaperFormat::A4);
        assert_eq!(doc.orientation, Orientation::Portrait);
        assert_eq!(doc.columns, 3);
        assert!((doc.row_height() - 296.0).abs() < 0.001);
        assert!(doc.items().is_empty());
        assert!(doc.geometry().show_header);
        assert!(doc.geometry().show_footer);
    }

    #[test]
    fn saved_state_fields_are_read() {
        let doc = FlyerDocument::from_json(
            r#"{
                "paperSize": "story",
                "orientation": "landscape",
                "columns": 4,
                "zoom": 80,
                "layout": { "cardHeight": 320, "rowGap": 20, "cardStyle": "classic" },
                "header": { "storeName": "Visconde", "customImage": "data:image/png;base64,AAAA" },
                "footer": { "showFooter": false, "addresses": [] },
                "products": [
                    { "id": "1", "name": "Picanha", "price": 69.9, "isHighlight": true, "cols": 2 },
                    { "id": "2", "type": "divider", "name": "Hortifruti" },
                    { "id": "3", "type": "product", "rows": 2 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.paper_size, PaperFormat::Story);
        assert_eq!(doc.orientation, Orientation::Landscape);
        assert!((doc.row_height() - 340.0).abs() < 0.001);

        let geometry = doc.geometry();
        assert!(geometry.header_is_custom_art);
        assert!(!geometry.footer_is_custom_art);
        assert!(!geometry.show_footer);

        let items = doc.items();
        assert_eq!(items[0], Item::highlight("1", 2));
        assert_eq!(
            items[1].kind,
            ItemKind::Divider {
                label: Some("Hortifruti".to_string())
            }
        );
        assert_eq!(items[2], Item::product("3").with_rows(2));
    }

    #[test]
    fn highlight_without_cols_spans_two() {
        let doc = FlyerDocument::from_json(
            r#"{ "products": [
                { "id": "big", "isHighlight": true },
                { "id": "wide", "isHighlight": true, "cols": 3 },
                { "id": "a" }
            ] }"#,
        )
        .unwrap();
        let items = doc.items();
        assert_eq!(items[0], Item::highlight("big", 2));
        assert_eq!(items[1], Item::highlight("wide", 3));
        assert_eq!(items[2], Item::product("a"));
    }

    #[test]
    fn blank_custom_image_is_not_art() {
        let doc = FlyerDocument::from_json(r#"{ "header": { "customImage": "  " } }"#).unwrap();
        assert!(!doc.geometry().header_is_custom_art);
    }

    #[test]
    fn constants_override() {
        let doc = FlyerDocument::from_json(r#"{ "layoutConstants": { "headerHeight": 100 } }"#)
            .unwrap();
        let constants = doc.layout_constants.unwrap();
        assert_eq!(constants.header_height, 100.0);
        assert_eq!(constants.footer_height, 120.0);
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        assert!(matches!(
            FlyerDocument::from_json(r#"{ "columns": "three" }"#),
            Err(FlyerError::Parse { .. })
        ));
    }
}
