//! # Page Capacity
//!
//! How many vertical pixels of a page are left for product rows once the
//! header band, footer band and interior padding have been reserved.

use serde::{Deserialize, Serialize};

use crate::model::{Orientation, PaperFormat};

/// Fixed vertical reserves of the flyer's visual design, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConstants {
    /// Templated header band.
    pub header_height: f64,
    /// Templated footer band. Shorter than the header.
    pub footer_height: f64,
    /// Height of a section divider row. Not derived from the row height.
    pub divider_height: f64,
    /// Interior content margin.
    pub vertical_padding: f64,
    /// Content margin on each side of the grid.
    pub horizontal_padding: f64,
    /// Gap between column tracks.
    pub column_gap: f64,
    /// Reserve used when the header is custom full-bleed art.
    /// Falls back to `header_height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_header_height: Option<f64>,
    /// Reserve used when the footer is custom full-bleed art.
    /// Falls back to `footer_height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_footer_height: Option<f64>,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            header_height: 192.0,
            footer_height: 120.0,
            divider_height: 80.0,
            vertical_padding: 48.0,
            horizontal_padding: 24.0,
            column_gap: 16.0,
            custom_header_height: None,
            custom_footer_height: None,
        }
    }
}

impl LayoutConstants {
    fn header_reserve(&self, geometry: &PageGeometry) -> f64 {
        if !geometry.show_header {
            0.0
        } else if geometry.header_is_custom_art {
            self.custom_header_height.unwrap_or(self.header_height)
        } else {
            self.header_height
        }
    }

    fn footer_reserve(&self, geometry: &PageGeometry) -> f64 {
        if !geometry.show_footer {
            0.0
        } else if geometry.footer_is_custom_art {
            self.custom_footer_height.unwrap_or(self.footer_height)
        } else {
            self.footer_height
        }
    }
}

/// Everything about a page's frame that affects its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub format: PaperFormat,
    pub orientation: Orientation,
    pub header_is_custom_art: bool,
    pub footer_is_custom_art: bool,
    pub show_header: bool,
    pub show_footer: bool,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            format: PaperFormat::A4,
            orientation: Orientation::Portrait,
            header_is_custom_art: false,
            footer_is_custom_art: false,
            show_header: true,
            show_footer: true,
        }
    }
}

impl PageGeometry {
    pub fn new(format: PaperFormat, orientation: Orientation) -> Self {
        Self {
            format,
            orientation,
            ..Default::default()
        }
    }
}

/// Oriented (width, height) of the page container in pixels.
pub fn page_size(geometry: &PageGeometry) -> (f64, f64) {
    let (width, height) = geometry.format.dimensions();
    match geometry.orientation {
        Orientation::Portrait => (width, height),
        Orientation::Landscape => (height, width),
    }
}

/// Horizontal space left for the grid on a single page.
pub fn content_width(geometry: &PageGeometry, constants: &LayoutConstants) -> f64 {
    let (width, _) = page_size(geometry);
    width - 2.0 * constants.horizontal_padding
}

/// Vertical space left for item rows on a single page.
///
/// Not clamped: a degenerate format can produce zero or a negative value,
/// which the paginator handles by placing one item per page.
pub fn compute_available_height(geometry: &PageGeometry, constants: &LayoutConstants) -> f64 {
    let (_, height) = page_size(geometry);
    height
        - constants.header_reserve(geometry)
        - constants.footer_reserve(geometry)
        - constants.vertical_padding
}
