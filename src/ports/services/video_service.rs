use crate::domain::{
    errors::ServiceResult,
    models::{VideoAsset, VideoUpload},
};
use async_trait::async_trait;

/// Port for the video upload use case
#[async_trait]
pub trait VideoService: Send + Sync + 'static {
    /// Upload a video, failing with a validation error when the upload
    /// is empty and a processing error when the provider returns an
    /// asset without an identifier
    async fn upload_video(&self, upload: VideoUpload) -> ServiceResult<VideoAsset>;

    /// Look up a hosted asset by its provider id
    async fn get_video(&self, asset_id: &str) -> ServiceResult<VideoAsset>;
}
