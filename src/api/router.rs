use std::sync::Arc;

use axum::{
  http::{StatusCode, Uri},
  routing::get,
  Json, Router,
};
use serde_json::json;
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  config::Config,
  error::AppError,
  market::{provider::YahooFinanceProvider, routes::market_routes, service::MarketService},
  sample::routes::sample_routes,
};

/// Builds the application with the Yahoo Finance provider configured in `config`.
pub fn create_router(config: &Config) -> Result<Router, AppError> {
  let provider = YahooFinanceProvider::new(&config.market_data_url)?;
  let market_service = MarketService::new(Arc::new(provider));

  Ok(create_router_with(config, market_service))
}

pub fn create_router_with(config: &Config, market_service: MarketService) -> Router {
  // Credentials rule out wildcards, so methods and headers are mirrored from the preflight.
  // A list (not a bare HeaderValue) so other origins get no allow-origin header.
  let cors = CorsLayer::new()
      .allow_origin(AllowOrigin::list([config.cors_origin.clone()]))
      .allow_methods(AllowMethods::mirror_request())
      .allow_headers(AllowHeaders::mirror_request())
      .allow_credentials(true);

  // Setup routes
  let api_routes = Router::new()
      .route("/health", get(health_check))
      .merge(sample_routes())
      .merge(market_routes(market_service));

  // Build the router
  Router::new()
      .route("/", get(root))
      .nest("/api", api_routes)
      .fallback(not_found)
      .layer(TraceLayer::new_for_http())
      .layer(cors)
}

async fn root() -> Json<serde_json::Value> {
  Json(json!({
      "message": "Welcome to Barebones API"
  }))
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "healthy",
          "message": "API is running"
      })),
  )
}

async fn not_found(uri: Uri) -> AppError {
  AppError::NotFoundError(uri.path().to_string())
}
