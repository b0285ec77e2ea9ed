use axum::{
  extract::{Query, State},
  Json,
};

use crate::{
  error::AppError,
  market::{
      model::{StockPriceResponse, StockQuery},
      service::MarketService,
  },
};

// Raw pairs rather than a typed query: `?ticker=A&ticker=B` takes the last value
// instead of failing on the duplicate.
pub async fn get_stock(
  State(service): State<MarketService>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<StockPriceResponse>, AppError> {
  let query = StockQuery::from_pairs(pairs);
  let latest_price = service.get_latest_price(&query.ticker).await?;
  Ok(Json(StockPriceResponse { latest_price }))
}
