use axum::{routing::get, Router};

use crate::sample::handler;

pub fn sample_routes() -> Router {
  Router::new().route("/data", get(handler::get_data))
}
