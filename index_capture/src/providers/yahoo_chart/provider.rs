use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use snafu::ResultExt;

use crate::{
    models::{bar::Bar, capture::CaptureParams},
    providers::{
        ApiSnafu, BarSource, ClientBuildSnafu, EmptyCaptureSnafu, ProviderInitError, RequestSnafu,
        SourceError,
        yahoo_chart::response::{ChartResponse, ChartResult},
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

// The chart endpoint rejects clients without a browser-looking agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Captures index bars from the public Yahoo v8 chart endpoint.
pub struct YahooChartProvider {
    client: Client,
}

impl YahooChartProvider {
    /// Creates a new chart provider.
    ///
    /// The HTTP client is built once with a request timeout, so no capture
    /// call can block past the scheduled run that issued it.
    pub fn new() -> Result<Self, ProviderInitError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BarSource for YahooChartProvider {
    async fn fetch_bars(&self, params: &CaptureParams) -> Result<Vec<Bar>, SourceError> {
        let url = format!("{BASE_URL}/{}", params.symbol);
        let query = [
            ("range", params.window.as_query()),
            ("interval", params.interval.as_query()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(RequestSnafu)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return ApiSnafu {
                message: format!("{status}: {body}"),
            }
            .fail();
        }

        let parsed = response
            .json::<ChartResponse>()
            .await
            .context(RequestSnafu)?;

        if let Some(err) = parsed.chart.error {
            return ApiSnafu {
                message: format!("{}: {}", err.code, err.description),
            }
            .fail();
        }

        let result = parsed
            .chart
            .result
            .and_then(|series| series.into_iter().next())
            .ok_or_else(|| {
                EmptyCaptureSnafu {
                    message: format!("no chart result for {}", params.symbol),
                }
                .build()
            })?;

        let bars = collect_bars(&result);
        if bars.is_empty() {
            return EmptyCaptureSnafu {
                message: format!("no complete bars for {}", params.symbol),
            }
            .fail();
        }

        Ok(bars)
    }
}

/// Zips the timestamp array with the parallel price arrays, dropping any slot
/// where the provider reported a null for one of the four prices.
fn collect_bars(result: &ChartResult) -> Vec<Bar> {
    let timestamps = match &result.timestamp {
        Some(ts) => ts,
        None => return Vec::new(),
    };
    let quote = match result.indicators.quote.first() {
        Some(quote) => quote,
        None => return Vec::new(),
    };

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, secs) in timestamps.iter().enumerate() {
        let slot = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        );
        if let (Some(open), Some(high), Some(low), Some(close)) = slot {
            if let Some(timestamp) = DateTime::<Utc>::from_timestamp(*secs, 0) {
                bars.push(Bar {
                    timestamp,
                    open,
                    high,
                    low,
                    close,
                });
            }
        }
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::yahoo_chart::response::{Indicators, Quote};

    fn result_with(timestamps: Vec<i64>, quote: Quote) -> ChartResult {
        ChartResult {
            timestamp: Some(timestamps),
            indicators: Indicators { quote: vec![quote] },
        }
    }

    #[test]
    fn collect_bars_drops_slots_with_null_prices() {
        let result = result_with(
            vec![1704096000, 1704099600, 1704103200],
            Quote {
                open: vec![Some(1.0), None, Some(3.0)],
                high: vec![Some(1.5), Some(2.5), Some(3.5)],
                low: vec![Some(0.5), Some(1.5), Some(2.5)],
                close: vec![Some(1.2), Some(2.2), Some(3.2)],
            },
        );

        let bars = collect_bars(&result);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].open, 1.0);
        assert_eq!(bars[1].open, 3.0);
        assert_eq!(bars[1].timestamp.timestamp(), 1704103200);
    }

    #[test]
    fn collect_bars_handles_missing_timestamp_array() {
        let result = ChartResult {
            timestamp: None,
            indicators: Indicators {
                quote: vec![Quote {
                    open: vec![],
                    high: vec![],
                    low: vec![],
                    close: vec![],
                }],
            },
        };
        assert!(collect_bars(&result).is_empty());
    }
}
