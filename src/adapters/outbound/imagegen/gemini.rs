use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult},
        models::GeneratedImage,
        value_objects::CapturedFrame,
    },
    ports::repositories::ImageGenerationRepository,
};

/// Configuration for the Gemini image-generation API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: "gemini-2.0-flash-exp".to_string(),
        }
    }
}

/// Gemini-backed image-generation adapter
///
/// Sends the prompt plus the captured frame as inline image data and
/// maps the first inline image in the response onto a data URL.
pub struct GeminiImageRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiImageRepository {
    pub fn new(config: &GeminiConfig) -> Self {
        let endpoint = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            config.model, config.api_key
        );

        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    fn build_request(prompt: &str, seed_data: Option<&str>) -> Value {
        let mut parts = vec![json!({ "text": prompt })];

        if let Some(seed) = seed_data {
            // Seed data arrives as a data URL or bare base64 payload
            if let Ok(frame) = CapturedFrame::new(seed.to_string()) {
                parts.push(json!({
                    "inline_data": {
                        "mime_type": frame.mime_type().unwrap_or("image/png"),
                        "data": frame.base64_payload(),
                    }
                }));
            }
        }

        json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseModalities": ["IMAGE", "TEXT"],
            }
        })
    }

    /// First inline image in the response, rendered as a data URL
    fn extract_image_url(response: &Value) -> Option<String> {
        let parts = response
            .pointer("/candidates/0/content/parts")?
            .as_array()?;

        for part in parts {
            let inline = match part.get("inlineData").or_else(|| part.get("inline_data")) {
                Some(inline) => inline,
                None => continue,
            };

            let mime = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(Value::as_str);
            let data = inline.get("data").and_then(Value::as_str);

            if let (Some(mime), Some(data)) = (mime, data) {
                return Some(format!("data:{mime};base64,{data}"));
            }
        }

        None
    }
}

#[async_trait]
impl ImageGenerationRepository for GeminiImageRepository {
    async fn generate_image(
        &self,
        prompt: &str,
        seed_data: Option<&str>,
    ) -> ServiceResult<GeneratedImage> {
        debug!(prompt_len = prompt.len(), "requesting image generation");

        let body = Self::build_request(prompt, seed_data);

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "Gemini API returned non-success status"
            );
            return Err(ServiceError::upstream(
                "gemini",
                format!("HTTP {status}"),
            ));
        }

        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| ServiceError::upstream("gemini", format!("invalid response body: {e}")))?;

        match Self::extract_image_url(&payload) {
            Some(url) => Ok(GeneratedImage::completed(
                url,
                prompt.to_string(),
                seed_data.map(String::from),
            )),
            None => {
                warn!("Gemini response carried no inline image");
                Ok(GeneratedImage::failed(
                    prompt.to_string(),
                    seed_data.map(String::from),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_image_url() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here is your mockup" },
                        { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
                    ]
                }
            }]
        });

        // First part has no inline data, so extraction walks past it
        let url = GeminiImageRepository::extract_image_url(&response);
        assert_eq!(url, Some("data:image/png;base64,aGVsbG8=".to_string()));
    }

    #[test]
    fn test_extract_missing_image() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "no image" }] } }]
        });
        assert!(GeminiImageRepository::extract_image_url(&response).is_none());
    }

    #[test]
    fn test_build_request_includes_seed() {
        let body = GeminiImageRepository::build_request(
            "a shirt",
            Some("data:image/jpeg;base64,aGVsbG8="),
        );
        let parts = body.pointer("/contents/0/parts").unwrap().as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[1]["inline_data"]["data"], "aGVsbG8=");
    }
}
