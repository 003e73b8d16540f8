use bytes::Bytes;
use merchify::{
    create_mock_app, MockVideoRepository, ServiceError, ValidationError, VideoService,
    VideoServiceImpl, VideoUpload,
};
use std::sync::Arc;

fn sample_upload() -> VideoUpload {
    VideoUpload {
        filename: "clip.mp4".to_string(),
        content_type: Some("video/mp4".to_string()),
        data: Bytes::from_static(b"fake video bytes"),
    }
}

#[tokio::test]
async fn upload_video_returns_ready_asset() {
    let services = create_mock_app().unwrap();

    let asset = services
        .video_service
        .upload_video(sample_upload())
        .await
        .unwrap();

    assert!(asset.is_ready());
    assert!(asset.playback_id.is_some());
    assert!(asset
        .thumbnail
        .as_deref()
        .is_some_and(|url| url.starts_with("https://image.mux.com/")));
}

#[tokio::test]
async fn upload_video_rejects_empty_body() {
    let services = create_mock_app().unwrap();

    let mut upload = sample_upload();
    upload.data = Bytes::new();

    let err = services
        .video_service
        .upload_video(upload)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::EmptyUpload)
    ));
}

#[tokio::test]
async fn upload_video_rejects_asset_without_identifier() {
    let video_service = VideoServiceImpl::new(Arc::new(MockVideoRepository::without_asset_id()));

    let err = video_service
        .upload_video(sample_upload())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Processing { .. }));
    assert!(err.to_string().contains("identifier"));
}

#[tokio::test]
async fn get_video_echoes_asset_id() {
    let services = create_mock_app().unwrap();

    let asset = services
        .video_service
        .get_video("mock_asset_0123456789")
        .await
        .unwrap();

    assert_eq!(asset.asset_id, "mock_asset_0123456789");
    assert!(asset.is_ready());
}

#[tokio::test]
async fn get_video_rejects_blank_id() {
    let services = create_mock_app().unwrap();

    let err = services.video_service.get_video("  ").await.unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { .. }));
}
