//! Payload parser turning fetched bytes into a data set

use bar_chart_shared::{BarChartError, BarChartResult, DataFormat, DataSet};
use serde::Deserialize;

/// JSON payloads accepted by the parser
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    Values(Vec<f64>),
    Wrapped { data: Vec<f64> },
}

/// Parser for data payloads in the supported formats
pub struct DataParser;

impl DataParser {
    /// Parse a payload in the given format
    pub fn parse(content: &str, format: DataFormat) -> BarChartResult<DataSet> {
        let data = match format {
            DataFormat::Json => Self::parse_json(content)?,
            DataFormat::Text => Self::parse_text(content)?,
        };
        log::debug!("Parsed {} values from {} payload", data.len(), format.as_str());
        Ok(data)
    }

    /// Parse raw bytes, which must be valid UTF-8
    pub fn parse_bytes(bytes: &[u8], format: DataFormat) -> BarChartResult<DataSet> {
        let content = std::str::from_utf8(bytes).map_err(|e| BarChartError::DataParse {
            message: format!("Payload is not valid UTF-8: {e}"),
            offset: Some(e.valid_up_to()),
        })?;
        Self::parse(content, format)
    }

    /// Parse a JSON array of numbers, or an object carrying one under `data`
    fn parse_json(content: &str) -> BarChartResult<DataSet> {
        // Check the shape first so a non-numeric entry reports a useful message
        let value: serde_json::Value = serde_json::from_str(content)?;
        let array = match &value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(map) => match map.get("data") {
                Some(serde_json::Value::Array(items)) => items,
                _ => {
                    return Err(BarChartError::DataParse {
                        message: "Expected an array of numbers or an object with a `data` array"
                            .to_string(),
                        offset: None,
                    })
                }
            },
            other => {
                return Err(BarChartError::DataParse {
                    message: format!("Expected an array of numbers, got {other}"),
                    offset: None,
                })
            }
        };

        if let Some((index, item)) = array.iter().enumerate().find(|(_, v)| !v.is_number()) {
            return Err(BarChartError::DataParse {
                message: format!("Entry {index} is not a number: {item}"),
                offset: Some(index),
            });
        }

        let payload: JsonPayload = serde_json::from_value(value)?;
        Ok(match payload {
            JsonPayload::Values(values) => DataSet::new(values),
            JsonPayload::Wrapped { data } => DataSet::new(data),
        })
    }

    /// Parse numbers separated by commas, whitespace or newlines.
    /// Lines starting with `#` are comments. Only finite numbers are
    /// accepted, matching what a JSON payload can carry.
    fn parse_text(content: &str) -> BarChartResult<DataSet> {
        let tokens = content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|token| !token.is_empty());

        let mut values = Vec::new();
        for (index, token) in tokens.enumerate() {
            let value = token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| BarChartError::DataParse {
                    message: format!("Token {index} is not a finite number: {token:?}"),
                    offset: Some(index),
                })?;
            values.push(value);
        }

        Ok(DataSet::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let data = DataParser::parse("[1, 2.5, -3, 0]", DataFormat::Json).unwrap();
        assert_eq!(data.values(), &[1.0, 2.5, -3.0, 0.0]);

        let empty = DataParser::parse("[]", DataFormat::Json).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_json_wrapped() {
        let data = DataParser::parse(r#"{"data": [4, 8, 15]}"#, DataFormat::Json).unwrap();
        assert_eq!(data.values(), &[4.0, 8.0, 15.0]);
    }

    #[test]
    fn test_parse_json_rejects_non_numeric_entries() {
        let err = DataParser::parse(r#"[1, "two", 3]"#, DataFormat::Json).unwrap_err();
        assert_eq!(
            err,
            BarChartError::DataParse {
                message: "Entry 1 is not a number: \"two\"".to_string(),
                offset: Some(1),
            }
        );

        assert!(DataParser::parse("42", DataFormat::Json).is_err());
        assert!(DataParser::parse(r#"{"values": [1]}"#, DataFormat::Json).is_err());
        assert!(DataParser::parse("[1, 2", DataFormat::Json).is_err());
    }

    #[test]
    fn test_parse_text() {
        let content = "# daily values\n1, 2,3\n\n4.5 5\n";
        let data = DataParser::parse(content, DataFormat::Text).unwrap();
        assert_eq!(data.values(), &[1.0, 2.0, 3.0, 4.5, 5.0]);
    }

    #[test]
    fn test_parse_text_reports_bad_token() {
        let err = DataParser::parse("1,2,abc,4", DataFormat::Text).unwrap_err();
        match err {
            BarChartError::DataParse { offset, message } => {
                assert_eq!(offset, Some(2));
                assert!(message.contains("abc"));
            }
            other => panic!("Wrong error variant: {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_rejects_non_finite_tokens() {
        for content in ["1,inf", "1 NaN", "1,-infinity", "1e400 2"] {
            let err = DataParser::parse(content, DataFormat::Text).unwrap_err();
            assert!(
                matches!(err, BarChartError::DataParse { offset: Some(_), .. }),
                "{content:?} was accepted"
            );
        }

        let data = DataParser::parse("1e3, -0.5", DataFormat::Text).unwrap();
        assert_eq!(data.values(), &[1000.0, -0.5]);
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = DataParser::parse_bytes(&[b'[', 0xff, b']'], DataFormat::Json).unwrap_err();
        assert!(matches!(err, BarChartError::DataParse { offset: Some(1), .. }));
    }
}
