//! Configuration system demonstration

use bar_chart_config::{
    BarChartConfig, ConfigFormat, ConfigParser, ConfigSerializer, ConfigValidator, SourceConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Bar Chart Configuration Demo\n");

    let config = BarChartConfig {
        source: SourceConfig::Inline {
            values: vec![4.0, 8.0, 15.0, 16.0, 23.0, 42.0],
        },
        ..Default::default()
    };
    ConfigValidator::validate(&config)?;

    for format in [ConfigFormat::Yaml, ConfigFormat::Toml, ConfigFormat::Json] {
        let text = ConfigSerializer::serialize_string(&config, format)?;
        println!("{format:?}:\n{text}\n");

        let parsed = ConfigParser::parse_string(&text, format)?;
        assert_eq!(parsed, config);
    }

    Ok(())
}
