use std::sync::Arc;

use tracing::{debug, warn};

use crate::{error::AppError, market::provider::PriceProvider};

#[derive(Clone)]
pub struct MarketService {
    provider: Arc<dyn PriceProvider>,
}

impl MarketService {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_latest_price(&self, ticker: &str) -> Result<f64, AppError> {
        debug!("Fetching latest price for {}", ticker);

        // No retry or cache: every request goes to the provider.
        match self.provider.latest_price(ticker).await {
            Ok(price) => {
                debug!("Latest price for {} is {}", ticker, price);
                Ok(price)
            }
            Err(e) => {
                warn!("Price lookup for {} failed: {}", ticker, e);
                Err(e)
            }
        }
    }
}
