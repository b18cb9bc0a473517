#![cfg(test)]
use index_capture::{
    models::capture::{CaptureParams, CaptureWindow, SampleInterval},
    providers::{BarSource, yahoo_chart::YahooChartProvider},
};
use serial_test::serial;

#[tokio::test]
#[serial]
#[ignore]
async fn test_yahoo_chart_provider_fetch_bars() {
    // Hits the public chart endpoint; run explicitly with `--ignored` from a
    // network-connected environment.
    let provider = YahooChartProvider::new().expect("Failed to create YahooChartProvider");

    let params = CaptureParams {
        symbol: "^FCHI".to_string(),
        window: CaptureWindow::OneDay,
        interval: SampleInterval::OneHour,
    };

    let result = provider.fetch_bars(&params).await;
    assert!(result.is_ok(), "fetch_bars returned an error: {:?}", result.err());

    let bars = result.unwrap();
    assert!(!bars.is_empty(), "Expected at least one bar for ^FCHI");
    assert!(bars.len() <= 24, "A one-day hourly window cannot exceed 24 bars");

    // Bars come back in chronological order.
    if bars.len() > 1 {
        assert!(bars[0].timestamp < bars[1].timestamp);
    }

    for bar in &bars {
        assert!(bar.low <= bar.high, "low must not exceed high");
    }
}
