use axum::{extract::State, http::StatusCode, Json};

use crate::{
    adapters::inbound::http::{
        dto::{status_for, ErrorResponseDto, GenerateImageDto, GeneratedImageDto},
        router::AppState,
    },
    domain::models::GenerateImageRequest,
};

/// Handle mockup generation
pub async fn generate_image(
    State(app_state): State<AppState>,
    Json(dto): Json<GenerateImageDto>,
) -> Result<Json<GeneratedImageDto>, (StatusCode, Json<ErrorResponseDto>)> {
    let request = GenerateImageRequest {
        prompt: dto.prompt,
        seed_data: dto.seed_data,
        product_type: dto.product_type,
        color: dto.color,
    };

    let image = app_state
        .image_service
        .generate_image(request)
        .await
        .map_err(|e| (status_for(&e), Json(ErrorResponseDto::from_service_error(&e))))?;

    Ok(Json(image.into()))
}
