use futures::future::BoxFuture;
use reqwest::Url;
use tracing::debug;

use crate::{
    error::AppError,
    market::model::ChartEnvelope,
};

const USER_AGENT: &str = concat!("barebones-api/", env!("CARGO_PKG_VERSION"));

/// Source of the latest traded price for a ticker.
pub trait PriceProvider: Send + Sync {
    fn latest_price<'a>(&'a self, ticker: &'a str) -> BoxFuture<'a, Result<f64, AppError>>;
}

/// Reads `regularMarketPrice` from the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooFinanceProvider {
    http: reqwest::Client,
    base_url: Url,
}

impl YahooFinanceProvider {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid market data URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::ConfigError("Market data URL cannot be a base".into()));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn chart_url(&self, ticker: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v8", "finance", "chart", ticker]);
        }
        url
    }

    async fn fetch_latest_price(&self, ticker: &str) -> Result<f64, AppError> {
        let url = self.chart_url(ticker);
        debug!("Requesting chart for {} from {}", ticker, url);

        let response = self
            .http
            .get(url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await?;

        // Unknown symbols come back as 404 with a chart error body, so decode before
        // looking at the status.
        let status = response.status();
        let body = response.bytes().await?;
        let envelope: ChartEnvelope = serde_json::from_slice(&body).map_err(|e| {
            AppError::ProviderError(format!(
                "Unexpected response for {} (HTTP {}): {}",
                ticker, status, e
            ))
        })?;

        extract_latest_price(ticker, envelope)
    }
}

impl PriceProvider for YahooFinanceProvider {
    fn latest_price<'a>(&'a self, ticker: &'a str) -> BoxFuture<'a, Result<f64, AppError>> {
        Box::pin(self.fetch_latest_price(ticker))
    }
}

pub fn extract_latest_price(ticker: &str, envelope: ChartEnvelope) -> Result<f64, AppError> {
    if let Some(err) = envelope.chart.error {
        return Err(AppError::ProviderError(format!(
            "{} ({}): {}",
            ticker, err.code, err.description
        )));
    }

    envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.meta.regular_market_price)
        .ok_or_else(|| AppError::ProviderError(format!("No price data found for {}", ticker)))
}
