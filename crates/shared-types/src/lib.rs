//! Shared types for the bar chart workspace
//!
//! This crate contains the types that are shared between the data-manager,
//! renderer, config-system and wasm-bridge crates: the data set that flows
//! from a source into the renderer, the fixed bar style, number formatting,
//! and the common error type.

pub mod data_types;
pub mod errors;
pub mod format;

pub use data_types::{BarStyle, DataFormat, DataSet};
pub use errors::{BarChartError, BarChartResult, ErrorContext, ErrorResponse};
pub use format::format_number;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_set_serialization() {
        let data = DataSet::from(vec![1.0, 2.5, 3.0]);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, "[1.0,2.5,3.0]");

        let back: DataSet = serde_json::from_str("[4, 5.5]").unwrap();
        assert_eq!(back.values(), &[4.0, 5.5]);
    }

    #[test]
    fn test_bar_style_matches_recipe() {
        let style = BarStyle::default();
        assert_eq!(style.bar_width(4.2), "42px");
        assert_eq!(style.label(4.2), "4.2");
        assert_eq!(
            style.fixed_properties(),
            [
                ("background-color", "steelblue"),
                ("border", "1px solid white"),
                ("color", "white"),
                ("padding-left", "2px"),
            ]
        );
    }
}
