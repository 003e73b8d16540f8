use axum::{extract::State, http::StatusCode, Json};

use crate::{
    adapters::inbound::http::{
        dto::{status_for, CreateOrderDto, ErrorResponseDto, OrderResponseDto},
        router::AppState,
    },
    domain::models::{CreateOrderRequest, Product},
};

/// Handle order creation and checkout
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(dto): Json<CreateOrderDto>,
) -> Result<(StatusCode, Json<OrderResponseDto>), (StatusCode, Json<ErrorResponseDto>)> {
    let product = Product::find_in_catalog(&dto.product_id).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::bad_request(&e.to_string())),
        )
    })?;

    let request = CreateOrderRequest {
        captured_frame: dto.captured_frame,
        product,
        color: dto.color,
        size: dto.size,
        quantity: dto.quantity,
    };

    let order = app_state
        .commerce_service
        .create_order(request)
        .await
        .map_err(|e| (status_for(&e), Json(ErrorResponseDto::from_service_error(&e))))?;

    Ok((StatusCode::CREATED, Json(order.into())))
}
