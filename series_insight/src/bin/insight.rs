use anyhow::Result;
use clap::{Parser, Subcommand};

use series_insight::cache::SeriesCache;
use series_insight::charts::{self, ForecastOrders};
use series_insight::column::SeriesColumn;
use summary_sync::db::{connection, migrate};
use summary_sync::store::repo::SqliteStore;

#[derive(Parser)]
#[command(version, about = "Series Insight CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Plot the average close series over time
    Price,

    /// Decompose one summary column into trend, seasonal, and residual
    Decompose {
        /// Observations per seasonal cycle
        #[arg(long, default_value_t = 12)]
        period: usize,

        /// Summary column to decompose
        #[arg(long, value_enum, default_value = "average-close")]
        column: SeriesColumn,
    },

    /// Fit a fixed-order ARIMA model and project future values
    Forecast {
        /// Autoregressive order (p)
        #[arg(long, default_value_t = 1)]
        ar: usize,

        /// Differencing order (d)
        #[arg(long, default_value_t = 1)]
        diff: usize,

        /// Moving-average order (q)
        #[arg(long, default_value_t = 1)]
        ma: usize,

        /// Number of points to project
        #[arg(long, default_value_t = 12)]
        steps: usize,

        /// Summary column to forecast
        #[arg(long, value_enum, default_value = "average-close")]
        column: SeriesColumn,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let db_url = shared_utils::env::get_env_var("DATABASE_URL")?;
    migrate::run_sqlite(&db_url)?;
    let mut conn = connection::connect_sqlite(&db_url)?;
    let store = SqliteStore::new();

    let mut cache = SeriesCache::new();
    let series = cache.refresh_if_stale(&mut conn, &store)?.to_vec();
    tracing::info!(records = series.len(), "summary series loaded");

    let chart = match cli.cmd {
        Cmd::Price => charts::price_chart(&series),
        Cmd::Decompose { period, column } => {
            charts::decomposition_chart(&series, column, period)
        }
        Cmd::Forecast {
            ar,
            diff,
            ma,
            steps,
            column,
        } => charts::forecast_chart(
            &series,
            column,
            ForecastOrders {
                p: ar,
                d: diff,
                q: ma,
            },
            steps,
        ),
    };

    match chart {
        Ok(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        // Analytics shortfalls are answers for the operator, not crashes.
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}
