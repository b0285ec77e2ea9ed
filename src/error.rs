use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("Market data error: {0}")]
  ProviderError(String),

  #[error("Not found: {0}")]
  NotFoundError(String),

  #[error("Internal server error: {0}")]
  InternalError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      Self::ProviderError(err.to_string())
  }
}

impl AppError {
  pub fn status_code(&self) -> StatusCode {
      match self {
          AppError::NotFoundError(_) => StatusCode::NOT_FOUND,
          AppError::ConfigError(_)
          | AppError::ProviderError(_)
          | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let status = self.status_code();
      let error_message = match self {
          AppError::ConfigError(_) => "A configuration error occurred".to_string(),
          AppError::ProviderError(err) => format!("Failed to fetch market data: {}", err),
          AppError::NotFoundError(_) => self.to_string(),
          AppError::InternalError(err) => {
              format!("An internal server error occurred: {}", err)
          }
      };

      let body = Json(json!({
          "status": "error",
          "message": error_message,
      }));

      (status, body).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn provider_failures_are_server_errors() {
      let err = AppError::ProviderError("No data found for symbol ZZZZ".into());
      assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(err.to_string(), "Market data error: No data found for symbol ZZZZ");
  }

  #[test]
  fn config_error_hides_details() {
      let response = AppError::ConfigError("Invalid PORT".into()).into_response();
      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn not_found_maps_to_404() {
      let response = AppError::NotFoundError("/nope".into()).into_response();
      assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }
}
