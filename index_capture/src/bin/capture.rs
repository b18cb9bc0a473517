use anyhow::Result;
use clap::Parser;

use index_capture::config::CaptureConfig;
use index_capture::io::{SnapshotSink, StagingDirSink};
use index_capture::providers::{BarSource, yahoo_chart::YahooChartProvider};

#[derive(Parser)]
#[command(version, about = "Index snapshot capture")]
struct Cli {
    /// Path to the capture config file (capture.toml)
    #[arg(short, long, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = CaptureConfig::load_path(&cli.config)?;
    let params = config.capture_params();

    let provider = YahooChartProvider::new()?;
    let bars = provider.fetch_bars(&params).await?;

    let sink = StagingDirSink::new(&config.staging_dir);
    let path = sink.write(&bars).await?;

    tracing::info!(
        symbol = %params.symbol,
        bars = bars.len(),
        path = %path.display(),
        "snapshot staged"
    );

    Ok(())
}
