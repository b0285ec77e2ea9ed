use serde::{Deserialize, Serialize};

pub const DEFAULT_TICKER: &str = "APO";

#[derive(Debug, Clone, PartialEq)]
pub struct StockQuery {
    pub ticker: String,
}

impl StockQuery {
    /// Picks `ticker` out of raw query pairs. A repeated key keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let ticker = pairs
            .into_iter()
            .filter(|(key, _)| key == "ticker")
            .map(|(_, value)| value)
            .last()
            .unwrap_or_else(|| DEFAULT_TICKER.to_string());

        Self { ticker }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPriceResponse {
    pub latest_price: f64,
}

// Yahoo Finance chart payload, reduced to the fields we read.

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn missing_ticker_defaults_to_apo() {
        assert_eq!(StockQuery::from_pairs(Vec::new()).ticker, "APO");
        assert_eq!(StockQuery::from_pairs(pairs(&[("foo", "bar")])).ticker, "APO");
    }

    #[test]
    fn repeated_ticker_keeps_last_value() {
        let query = StockQuery::from_pairs(pairs(&[("ticker", "A"), ("other", "x"), ("ticker", "B")]));
        assert_eq!(query.ticker, "B");
    }

    #[test]
    fn empty_ticker_is_kept() {
        assert_eq!(StockQuery::from_pairs(pairs(&[("ticker", "")])).ticker, "");
    }
}
