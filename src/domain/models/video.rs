use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Processing states of a hosted video asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Processing,
    Ready,
    Failed,
}

/// A raw video file received from the client
#[derive(Debug, Clone)]
pub struct VideoUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl VideoUpload {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A video hosted by the video provider
#[derive(Debug, Clone, Serialize)]
pub struct VideoAsset {
    pub id: String,
    pub asset_id: String,
    pub playback_id: Option<String>,
    pub thumbnail: Option<String>,
    pub status: VideoStatus,
}

impl VideoAsset {
    /// Whether the asset can be played back
    pub fn is_ready(&self) -> bool {
        self.status == VideoStatus::Ready && self.playback_id.is_some()
    }

    /// The thumbnail URL, derived from the playback id when the provider
    /// did not return one explicitly
    pub fn thumbnail_url(&self) -> Option<String> {
        if let Some(thumbnail) = &self.thumbnail {
            return Some(thumbnail.clone());
        }

        self.playback_id
            .as_ref()
            .map(|playback_id| format!("https://image.mux.com/{}/thumbnail.jpg", playback_id))
    }
}
