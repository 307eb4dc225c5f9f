//! Command line front end: acquire a data set, render it into a page and
//! write the page out as HTML

pub mod source;

pub use source::ConfiguredSource;

use anyhow::{bail, Context, Result};
use bar_chart_config::{BarChartConfig, ConfigValidator, SourceConfig};
use bar_chart_data::{DataParser, DataSource};
use bar_chart_renderer::{ChartRenderer, Document, DomTree};
use bar_chart_shared::DataFormat;
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::{debug, info};

/// Command line overrides applied on top of a configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Comma or whitespace separated values
    pub values: Option<String>,
    pub file: Option<PathBuf>,
    pub url: Option<String>,
    pub format: Option<DataFormat>,
    pub timeout_ms: Option<u64>,
    pub mount: Option<String>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub repeat: Option<u32>,
}

/// Merge overrides into `config` and validate the result.
///
/// `format` applies to file and URL sources, `timeout_ms` to URL sources,
/// whether the source comes from the overrides or from the config file.
pub fn apply_overrides(mut config: BarChartConfig, overrides: Overrides) -> Result<BarChartConfig> {
    if let Some(values) = overrides.values {
        let data = DataParser::parse(&values, DataFormat::Text)
            .context("Failed to parse --values")?;
        config.source = SourceConfig::Inline {
            values: data.into_inner(),
        };
    } else if let Some(path) = overrides.file {
        config.source = SourceConfig::File { path, format: None };
    } else if let Some(url) = overrides.url {
        config.source = SourceConfig::Http {
            url,
            format: None,
            timeout_ms: None,
        };
    }

    if let Some(new_format) = overrides.format {
        match &mut config.source {
            SourceConfig::File { format, .. } | SourceConfig::Http { format, .. } => {
                *format = Some(new_format);
            }
            SourceConfig::Inline { .. } => {
                bail!("--format only applies to file or url sources")
            }
        }
    }
    if let Some(ms) = overrides.timeout_ms {
        match &mut config.source {
            SourceConfig::Http { timeout_ms, .. } => *timeout_ms = Some(ms),
            other => bail!("--timeout-ms only applies to url sources, not {}", other.kind()),
        }
    }

    if let Some(mount) = overrides.mount {
        config.mount = mount;
    }
    if let Some(output) = overrides.output {
        config.output.path = Some(output);
    }
    if let Some(title) = overrides.title {
        config.output.title = title;
    }
    if let Some(repeat) = overrides.repeat {
        config.repeat = repeat;
    }

    ConfigValidator::validate(&config)?;
    Ok(config)
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub html: String,
    pub charts: usize,
    pub bars: usize,
}

/// Create the host element for an `#id` mount that the blank page lacks
fn prepare_mount(tree: &mut DomTree, mount: &str) -> Result<()> {
    if tree.query_selector(mount).is_some() {
        return Ok(());
    }
    if let Some(id) = mount.strip_prefix('#') {
        let body = tree.body();
        let host = tree.append_element(&body, "div")?;
        tree.set_attribute(host, "id", id)?;
        debug!("Created mount point {mount}");
    }
    Ok(())
}

/// Run every configured render pass into a fresh page
pub async fn render_page(config: &BarChartConfig) -> Result<RenderReport> {
    let source = ConfiguredSource::from_config(&config.source)?;

    let mut tree = DomTree::new();
    tree.set_title(&config.output.title);
    prepare_mount(&mut tree, &config.mount)?;
    let container = tree.mount_point(&config.mount)?;
    let tree = RefCell::new(tree);

    let renderer = ChartRenderer::new();
    let mut bars = 0;
    for pass in 1..=config.repeat {
        let chart = renderer
            .render_from(&source, &tree, &container)
            .await
            .with_context(|| format!("Render pass {pass} failed ({})", source.describe()))?;
        info!("Render pass {pass}: {} bars", chart.bar_count());
        bars += chart.bar_count();
    }

    Ok(RenderReport {
        html: tree.into_inner().to_html(),
        charts: config.repeat as usize,
        bars,
    })
}

/// Render and write the page to the configured output, or return it for
/// standard output when no path is set
pub async fn run(config: &BarChartConfig) -> Result<Option<String>> {
    let report = render_page(config).await?;

    match &config.output.path {
        Some(path) => {
            tokio::fs::write(path, &report.html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} chart(s) with {} bars to {}",
                report.charts,
                report.bars,
                path.display()
            );
            Ok(None)
        }
        None => Ok(Some(report.html)),
    }
}
