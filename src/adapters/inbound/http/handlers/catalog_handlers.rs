use axum::Json;
use serde_json::{json, Value};

use crate::{adapters::inbound::http::dto::ProductDto, domain::models::Product};

/// Handle catalog listing
pub async fn list_products() -> Json<Vec<ProductDto>> {
    Json(Product::catalog().into_iter().map(Into::into).collect())
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
