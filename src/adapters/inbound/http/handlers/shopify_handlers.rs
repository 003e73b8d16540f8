use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::adapters::inbound::http::{
    dto::{status_for, ErrorResponseDto, ShopifyQueryDto},
    router::AppState,
};

/// Handle raw Storefront GraphQL pass-through
pub async fn shopify_query(
    State(app_state): State<AppState>,
    Json(dto): Json<ShopifyQueryDto>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponseDto>)> {
    let result = app_state
        .commerce_service
        .execute_query(&dto.query, dto.variables)
        .await
        .map_err(|e| (status_for(&e), Json(ErrorResponseDto::from_service_error(&e))))?;

    Ok(Json(result))
}
