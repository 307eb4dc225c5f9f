//! Integration tests for the data manager

use bar_chart_data::{
    BarChartError, DataFormat, DataParser, DataSource, FileSource, StaticSource,
};
use std::io::Write;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn test_file_source_text_payload() {
    init_logging();

    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "# value per day").unwrap();
    writeln!(file, "12, 7, 30").unwrap();
    writeln!(file, "4").unwrap();

    let source = FileSource::new(file.path());
    let data = source.fetch().await.unwrap();

    assert_eq!(data.values(), &[12.0, 7.0, 30.0, 4.0]);
    assert!(source.describe().starts_with("file "));
}

#[tokio::test]
async fn test_file_source_parse_failure_surfaces() {
    init_logging();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"data": [1, null]}}"#).unwrap();

    let err = FileSource::new(file.path()).fetch().await.unwrap_err();
    assert!(matches!(err, BarChartError::DataParse { offset: Some(1), .. }));
}

#[tokio::test]
async fn test_static_source_can_be_fetched_repeatedly() {
    let source = StaticSource::new(vec![5.0, 10.0]);

    let first = source.fetch().await.unwrap();
    let second = source.fetch().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_parser_accepts_negative_values() {
    let data = DataParser::parse("[-1, 0, 1]", DataFormat::Json).unwrap();
    assert_eq!(data.values(), &[-1.0, 0.0, 1.0]);
}
