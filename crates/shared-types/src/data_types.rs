//! Common data types used across the system

use crate::format::format_number;
use serde::{Deserialize, Serialize};

/// Ordered, finite sequence of values produced by a data source.
///
/// Array order is render order. A data set is read once per render pass and
/// never mutated after it has been obtained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    values: Vec<f64>,
}

impl DataSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for DataSet {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<f64> for DataSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Visual rules applied to every bar.
///
/// Width and label are computed from the bound value, everything else is
/// identical across bars. `BarStyle::default()` is the fixed chart recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub width_scale: f64,
    pub width_unit: String,
    pub background_color: String,
    pub border: String,
    pub color: String,
    pub padding_left: String,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width_scale: 10.0,
            width_unit: "px".to_string(),
            background_color: "steelblue".to_string(),
            border: "1px solid white".to_string(),
            color: "white".to_string(),
            padding_left: "2px".to_string(),
        }
    }
}

impl BarStyle {
    /// Width style value for a bar bound to `value`, e.g. `3` -> `"30px"`.
    /// Negative values yield a negative width and are not clamped.
    pub fn bar_width(&self, value: f64) -> String {
        format!("{}{}", format_number(value * self.width_scale), self.width_unit)
    }

    /// Text content for a bar bound to `value`.
    pub fn label(&self, value: f64) -> String {
        format_number(value)
    }

    /// Value-independent style properties, in application order.
    pub fn fixed_properties(&self) -> [(&'static str, &str); 4] {
        [
            ("background-color", self.background_color.as_str()),
            ("border", self.border.as_str()),
            ("color", self.color.as_str()),
            ("padding-left", self.padding_left.as_str()),
        ]
    }
}

/// Wire format of a data payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// JSON array of numbers, or an object with a `data` array
    Json,
    /// Numbers separated by commas, whitespace or newlines
    Text,
}

impl DataFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DataFormat::Json),
            "txt" | "csv" => Some(DataFormat::Text),
            _ => None,
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("json") {
            Some(DataFormat::Json)
        } else if content_type.starts_with("text/") {
            Some(DataFormat::Text)
        } else {
            None
        }
    }

    /// Format implied by the extension at the end of a path or URL path.
    pub fn from_path(path: &str) -> Option<Self> {
        let file_name = path.rsplit('/').next()?;
        let (_, ext) = file_name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Text => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_set_preserves_order() {
        let data: DataSet = [3.0, 1.0, 2.0].into_iter().collect();
        assert_eq!(data.len(), 3);
        assert_eq!(data.iter().collect::<Vec<_>>(), vec![3.0, 1.0, 2.0]);
        assert!(DataSet::default().is_empty());
    }

    #[test]
    fn test_bar_width_is_permissive() {
        let style = BarStyle::default();
        assert_eq!(style.bar_width(1.0), "10px");
        assert_eq!(style.bar_width(0.0), "0px");
        assert_eq!(style.bar_width(-2.0), "-20px");
        assert_eq!(style.bar_width(0.25), "2.5px");
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(DataFormat::from_extension("JSON"), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_extension("csv"), Some(DataFormat::Text));
        assert_eq!(DataFormat::from_extension("bin"), None);

        assert_eq!(
            DataFormat::from_content_type("application/json; charset=utf-8"),
            Some(DataFormat::Json)
        );
        assert_eq!(
            DataFormat::from_content_type("text/plain"),
            Some(DataFormat::Text)
        );
        assert_eq!(DataFormat::from_content_type("application/octet-stream"), None);

        assert_eq!(DataFormat::from_path("/api/values.json"), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path("data/values.txt"), Some(DataFormat::Text));
        assert_eq!(DataFormat::from_path("/api/values"), None);
    }
}
