use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    adapters::inbound::http::{
        dto::{status_for, ErrorResponseDto, VideoAssetDto},
        router::AppState,
    },
    domain::models::VideoUpload,
};

/// Handle video upload (multipart, field name "file")
pub async fn upload_video(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<VideoAssetDto>), (StatusCode, Json<ErrorResponseDto>)> {
    let mut upload: Option<VideoUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::bad_request(&format!(
                "Invalid multipart body: {}",
                e
            ))),
        )
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponseDto::bad_request(&format!(
                    "Failed to read upload: {}",
                    e
                ))),
            )
        })?;

        upload = Some(VideoUpload {
            filename,
            content_type,
            data,
        });
        break;
    }

    let upload = upload.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::bad_request("Missing 'file' field")),
        )
    })?;

    let asset = app_state
        .video_service
        .upload_video(upload)
        .await
        .map_err(|e| (status_for(&e), Json(ErrorResponseDto::from_service_error(&e))))?;

    Ok((StatusCode::CREATED, Json(asset.into())))
}

/// Handle video asset lookup
pub async fn get_video(
    State(app_state): State<AppState>,
    Path(asset_id): Path<String>,
) -> Result<Json<VideoAssetDto>, (StatusCode, Json<ErrorResponseDto>)> {
    let asset = app_state
        .video_service
        .get_video(&asset_id)
        .await
        .map_err(|e| (status_for(&e), Json(ErrorResponseDto::from_service_error(&e))))?;

    Ok(Json(asset.into()))
}
