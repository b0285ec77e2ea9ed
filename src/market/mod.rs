pub mod handler;
pub mod model;
pub mod provider;
pub mod routes;
pub mod service;

pub use provider::{PriceProvider, YahooFinanceProvider};
pub use service::MarketService;
