use anyhow::{Context, Result};
use bar_chart_cli::{apply_overrides, run, Overrides};
use bar_chart_config::BarChartConfig;
use bar_chart_shared::DataFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bar-chart")]
#[command(about = "Render a data set as an HTML bar chart", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire the data and render the chart page
    Render(RenderArgs),
    /// Parse and validate a configuration file
    Validate {
        /// Config file path (.yaml, .json or .toml)
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Inline values, e.g. "4,8,15,16"
    #[arg(long, conflicts_with_all = ["file", "url"])]
    values: Option<String>,

    /// Data file (.json, .txt or .csv)
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    file: Option<PathBuf>,

    /// URL of a JSON or text payload
    #[arg(long)]
    url: Option<String>,

    /// Payload format of a file or url source when it cannot be inferred
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Timeout of a url source in milliseconds (no timeout by default)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Selector of the mount point
    #[arg(short, long)]
    mount: Option<String>,

    /// Output file (standard output by default)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Number of independent render passes
    #[arg(long)]
    repeat: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for DataFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => DataFormat::Json,
            FormatArg::Text => DataFormat::Text,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the page itself may go to stdout
    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render(args) => render(args).await,
        Commands::Validate { config } => {
            let loaded = BarChartConfig::load(&config)
                .with_context(|| format!("Invalid configuration {}", config.display()))?;
            info!(
                "{} is valid ({} source, mount {:?})",
                config.display(),
                loaded.source.kind(),
                loaded.mount
            );
            Ok(())
        }
    }
}

async fn render(args: RenderArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => BarChartConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => BarChartConfig::default(),
    };

    let config = apply_overrides(
        base,
        Overrides {
            values: args.values,
            file: args.file,
            url: args.url,
            format: args.format.map(Into::into),
            timeout_ms: args.timeout_ms,
            mount: args.mount,
            output: args.output,
            title: args.title,
            repeat: args.repeat,
        },
    )?;

    info!(
        "Rendering from {} source into {:?}",
        config.source.kind(),
        config.mount
    );

    if let Some(html) = run(&config).await? {
        print!("{html}");
    }
    Ok(())
}
