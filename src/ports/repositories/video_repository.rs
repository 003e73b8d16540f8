use crate::domain::{
    errors::ServiceResult,
    models::{VideoAsset, VideoUpload},
};
use async_trait::async_trait;

/// Repository for the external video hosting provider
/// Implementations push raw uploads to the provider and map its asset
/// payloads onto the domain shape
#[async_trait]
pub trait VideoRepository: Send + Sync + 'static {
    /// Upload a video file and register it as a hosted asset
    async fn upload_video(&self, upload: &VideoUpload) -> ServiceResult<VideoAsset>;

    /// Fetch the current state of a hosted asset
    async fn get_asset(&self, asset_id: &str) -> ServiceResult<VideoAsset>;
}
