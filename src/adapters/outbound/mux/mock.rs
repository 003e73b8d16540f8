use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{
        errors::ServiceResult,
        models::{VideoAsset, VideoStatus, VideoUpload},
    },
    ports::repositories::VideoRepository,
};

/// In-memory video adapter for testing and local development
///
/// Every upload yields a ready mock asset with a playback id, matching
/// the stubbed upload endpoint the product shipped with.
#[derive(Default)]
pub struct MockVideoRepository {
    omit_asset_id: bool,
}

impl MockVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce assets without an asset id, as a misbehaving provider would
    pub fn without_asset_id() -> Self {
        Self {
            omit_asset_id: true,
        }
    }

    fn mock_asset(asset_id: String) -> VideoAsset {
        let suffix: String = asset_id
            .chars()
            .rev()
            .take(8)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let playback_id = format!("mock-playback-{suffix}");
        let mut asset = VideoAsset {
            id: asset_id.clone(),
            asset_id,
            playback_id: Some(playback_id),
            thumbnail: None,
            status: VideoStatus::Ready,
        };
        asset.thumbnail = asset.thumbnail_url();
        asset
    }
}

#[async_trait]
impl VideoRepository for MockVideoRepository {
    async fn upload_video(&self, _upload: &VideoUpload) -> ServiceResult<VideoAsset> {
        if self.omit_asset_id {
            let mut asset = Self::mock_asset(String::new());
            asset.playback_id = None;
            asset.thumbnail = None;
            return Ok(asset);
        }

        let asset_id = format!("mock_asset_{}", Uuid::new_v4().simple());
        Ok(Self::mock_asset(asset_id))
    }

    async fn get_asset(&self, asset_id: &str) -> ServiceResult<VideoAsset> {
        Ok(Self::mock_asset(asset_id.to_string()))
    }
}
