//! Structured error types for flyer pagination.
//!
//! The packer itself never fails. Errors come from two places: parsing a
//! layout document, and boundary validation of paginator preconditions.

use thiserror::Error;

/// The unified error type returned by all fallible public functions.
#[derive(Debug, Error)]
pub enum FlyerError {
    /// JSON input failed to parse as a valid layout document.
    #[error("Failed to parse layout document: {source}{}", format_hint(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// The grid needs at least one column.
    #[error("Invalid column count {0}: a flyer grid needs at least one column")]
    InvalidColumns(u32),

    /// A product asked to be zero rows tall.
    #[error("Item '{id}' has row multiplier {value}; it must be at least 1")]
    InvalidRowMultiplier { id: String, value: u32 },

    /// Two items share the same id.
    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),

    /// Row height must be a finite, non-negative pixel value.
    #[error("Invalid row height {0}")]
    InvalidRowHeight(f64),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for FlyerError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let hint = match e.classify() {
            Category::Syntax => {
                "The saved flyer is not valid JSON. Re-export it from the designer.".to_string()
            }
            Category::Data => format!(
                "Line {} does not fit a flyer: `products` must be a list of cards with an `id`, \
                 `cols` and `rows` must be whole numbers, and `paperSize` must be one of \
                 feed, feed-story, story, a4, a3, letter, tabloid.",
                e.line()
            ),
            Category::Eof => "The flyer JSON stops early; the saved file looks cut off.".to_string(),
            Category::Io => String::new(),
        };
        FlyerError::Parse { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_carry_a_hint() {
        let err: FlyerError = serde_json::from_str::<serde_json::Value>("{,}")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse layout document"));
        assert!(msg.contains("Hint: The saved flyer is not valid JSON"));
    }

    #[test]
    fn eof_hint() {
        let err: FlyerError = serde_json::from_str::<serde_json::Value>("{\"a\":")
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("cut off"));
    }

    #[test]
    fn schema_mismatch_names_flyer_fields() {
        let err: FlyerError =
            serde_json::from_str::<crate::document::FlyerDocument>(r#"{ "paperSize": "a5" }"#)
                .unwrap_err()
                .into();
        let msg = err.to_string();
        assert!(msg.contains("`paperSize`"));
        assert!(msg.contains("`products`"));
        assert!(msg.contains("`cols`"));
        assert!(msg.contains("Line 1"));
    }

    #[test]
    fn parse_error_exposes_source() {
        use std::error::Error as _;
        let err: FlyerError = serde_json::from_str::<serde_json::Value>("[")
            .unwrap_err()
            .into();
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_messages_name_the_culprit() {
        assert!(FlyerError::DuplicateId("7".into()).to_string().contains("'7'"));
        assert!(FlyerError::InvalidColumns(0).to_string().contains('0'));
        let err = FlyerError::InvalidRowMultiplier {
            id: "x".into(),
            value: 0,
        };
        assert!(err.to_string().contains("'x'"));
    }
}
