use axum::Json;

use crate::sample::model::{sample_items, SampleDataResponse};

pub async fn get_data() -> Json<SampleDataResponse> {
  let data = sample_items();

  Json(SampleDataResponse {
      total: data.len(),
      data,
      message: "Sample data retrieved successfully".to_string(),
  })
}
