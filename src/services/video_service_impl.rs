use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult, ValidationError},
        models::{VideoAsset, VideoUpload},
    },
    ports::{repositories::VideoRepository, services::VideoService},
};

/// Implementation of VideoService delegating to the video provider
#[derive(Clone)]
pub struct VideoServiceImpl {
    repository: Arc<dyn VideoRepository>,
}

impl VideoServiceImpl {
    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl VideoService for VideoServiceImpl {
    async fn upload_video(&self, upload: VideoUpload) -> ServiceResult<VideoAsset> {
        if upload.is_empty() {
            return Err(ValidationError::EmptyUpload.into());
        }

        let asset = self.repository.upload_video(&upload).await?;

        if asset.asset_id.trim().is_empty() {
            return Err(ServiceError::Processing {
                message: "provider returned an asset without an identifier".to_string(),
            });
        }

        info!(
            asset_id = %asset.asset_id,
            filename = %upload.filename,
            "video uploaded"
        );

        Ok(asset)
    }

    async fn get_video(&self, asset_id: &str) -> ServiceResult<VideoAsset> {
        if asset_id.trim().is_empty() {
            return Err(ServiceError::NotFound {
                resource: "video asset".to_string(),
            });
        }

        self.repository.get_asset(asset_id).await
    }
}
