use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::ProductType;

/// Generation states of an AI mockup image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Generating,
    Complete,
    Failed,
}

/// Request to generate a product mockup image
#[derive(Debug, Clone, Default)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
    pub seed_data: Option<String>,
    pub product_type: Option<ProductType>,
    pub color: Option<String>,
}

/// An AI-generated product mockup
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: Option<String>,
    pub prompt: String,
    pub seed_data: Option<String>,
    pub status: ImageStatus,
    pub created_at: DateTime<Utc>,
}

impl GeneratedImage {
    /// A completed image with a usable URL
    pub fn completed(url: String, prompt: String, seed_data: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: Some(url),
            prompt,
            seed_data,
            status: ImageStatus::Complete,
            created_at: Utc::now(),
        }
    }

    /// A failed generation attempt with no usable URL
    pub fn failed(prompt: String, seed_data: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: None,
            prompt,
            seed_data,
            status: ImageStatus::Failed,
            created_at: Utc::now(),
        }
    }

    /// Whether generation finished with a usable URL
    pub fn is_complete(&self) -> bool {
        self.status == ImageStatus::Complete && self.url.is_some()
    }
}
