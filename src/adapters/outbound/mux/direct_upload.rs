use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult},
        models::{VideoAsset, VideoStatus, VideoUpload},
    },
    ports::repositories::VideoRepository,
};

const MUX_API_BASE: &str = "https://api.mux.com/video/v1";

/// Configuration for the Mux video API
#[derive(Debug, Clone)]
pub struct MuxConfig {
    pub token_id: String,
    pub token_secret: String,
}

/// Mux adapter using the direct-upload flow: create an upload, PUT the
/// file bytes to the signed URL, then report the asset as processing
pub struct MuxVideoRepository {
    client: reqwest::Client,
    config: MuxConfig,
}

impl MuxVideoRepository {
    pub fn new(config: MuxConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn create_direct_upload(&self) -> ServiceResult<(String, String)> {
        let body = json!({
            "new_asset_settings": { "playback_policy": ["public"] },
            "cors_origin": "*",
        });

        let response = self
            .client
            .post(format!("{MUX_API_BASE}/uploads"))
            .basic_auth(&self.config.token_id, Some(&self.config.token_secret))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Mux upload creation failed");
            return Err(ServiceError::upstream("mux", format!("HTTP {status}")));
        }

        let payload: Value = response.json().await?;

        let upload_id = payload
            .pointer("/data/id")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::upstream("mux", "upload response missing id"))?;
        let upload_url = payload
            .pointer("/data/url")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::upstream("mux", "upload response missing url"))?;

        Ok((upload_id.to_string(), upload_url.to_string()))
    }

    fn asset_from_payload(payload: &Value) -> ServiceResult<VideoAsset> {
        let data = payload
            .get("data")
            .ok_or_else(|| ServiceError::upstream("mux", "asset response missing data"))?;

        let asset_id = data
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::upstream("mux", "asset missing id"))?;

        let status = match data.get("status").and_then(Value::as_str) {
            Some("ready") => VideoStatus::Ready,
            Some("errored") => VideoStatus::Failed,
            _ => VideoStatus::Processing,
        };

        let playback_id = data
            .pointer("/playback_ids/0/id")
            .and_then(Value::as_str)
            .map(String::from);

        let mut asset = VideoAsset {
            id: asset_id.to_string(),
            asset_id: asset_id.to_string(),
            playback_id,
            thumbnail: None,
            status,
        };
        asset.thumbnail = asset.thumbnail_url();

        Ok(asset)
    }
}

#[async_trait]
impl VideoRepository for MuxVideoRepository {
    async fn upload_video(&self, upload: &VideoUpload) -> ServiceResult<VideoAsset> {
        let (upload_id, upload_url) = self.create_direct_upload().await?;

        debug!(upload_id = %upload_id, filename = %upload.filename, "pushing video to Mux");

        let response = self
            .client
            .put(&upload_url)
            .header(
                "Content-Type",
                upload.content_type.as_deref().unwrap_or("video/mp4"),
            )
            .body(upload.data.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::upstream(
                "mux",
                format!("upload PUT failed: HTTP {}", response.status()),
            ));
        }

        // The asset id is resolved asynchronously by Mux; until then the
        // upload id identifies the asset to the caller
        Ok(VideoAsset {
            id: upload_id.clone(),
            asset_id: upload_id,
            playback_id: None,
            thumbnail: None,
            status: VideoStatus::Processing,
        })
    }

    async fn get_asset(&self, asset_id: &str) -> ServiceResult<VideoAsset> {
        let response = self
            .client
            .get(format!("{MUX_API_BASE}/assets/{asset_id}"))
            .basic_auth(&self.config.token_id, Some(&self.config.token_secret))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound {
                resource: format!("video asset '{asset_id}'"),
            });
        }

        if !status.is_success() {
            return Err(ServiceError::upstream("mux", format!("HTTP {status}")));
        }

        let payload: Value = response.json().await?;
        Self::asset_from_payload(&payload)
    }
}
